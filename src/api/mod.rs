//! Chart-facing API: formatters, data mapping, options and presentation.

mod chart_data;
mod chart_options;
pub mod format;
mod json_contract;
mod line_chart;
mod projection_chart;

pub use chart_data::{
    ChartData, ChartDataset, DatasetStyle, SERIES_TENSION, SeriesKey, process_chart_data,
};
pub use chart_options::{
    AnimationOptions, AxisLabels, AxisTitle, CategoryAxisOptions, CategoryTickFormat,
    CategoryTicks, ChartOptions, CrosshairLineOptions, CrosshairOptions, CrosshairSyncOptions,
    CrosshairZoomOptions, DEFAULT_CURRENCY_SYMBOL, DEFAULT_Y_AXIS_LABEL, FontSpec, FontWeight,
    InteractionMode, InteractionOptions, LegendLabels, LegendOptions, LinearAxisOptions,
    LinearTicks, PluginOptions, Position, ScaleKind, ScaleOptions, SyncMode, TitleOptions,
    TooltipCallbacks, TooltipItem, TooltipLabelFormat, TooltipOptions, TooltipTitleFormat,
    ValueTickFormat, build_chart_options,
};
pub use format::{
    DEFAULT_MAX_FRACTION_DIGITS, format_currency_value, format_date_to_month_year,
    format_tooltip_label, format_y_axis_value,
};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use line_chart::{LineChart, LineChartLayout};
pub use projection_chart::{
    DEFAULT_PROJECTION_TITLE, DEFAULT_PROJECTION_Y_AXIS_LABEL, ProjectionChart,
    ProjectionChartConfig,
};
