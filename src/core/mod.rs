pub mod projection;
pub mod scale;
pub mod types;

pub use projection::{DataPoint, ExpectedAmounts, ProjectionDataSet};
pub use scale::{LinearScale, axis_tick_target_count};
pub use types::{PlotArea, Viewport};
