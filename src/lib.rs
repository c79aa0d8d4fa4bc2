//! projection-chart: investment projection line chart.
//!
//! Raw monthly projection records are mapped into styled chart series,
//! paired with a typed options tree, and laid out into backend-agnostic
//! render frames. Call [`register_chart_plugins`] once before rendering.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{
    AxisLabels, ChartData, ChartOptions, LineChart, ProjectionChart, ProjectionChartConfig,
    build_chart_options, process_chart_data,
};
pub use error::{ChartError, ChartResult};
pub use extensions::register_chart_plugins;
