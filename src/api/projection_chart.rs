use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ProjectionDataSet;
use crate::error::{ChartError, ChartResult};

use super::{
    AxisLabels, ChartData, ChartOptions, DEFAULT_CURRENCY_SYMBOL, LineChart, LineChartLayout,
    build_chart_options, process_chart_data,
};

pub const DEFAULT_PROJECTION_TITLE: &str =
    "This projection is based on historical returns and not guaranteed.";
pub const DEFAULT_PROJECTION_Y_AXIS_LABEL: &str = "Amount (SGD)";

/// Text and currency settings for the investment projection chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionChartConfig {
    pub title: String,
    pub axis_labels: AxisLabels,
    pub currency_symbol: String,
    pub layout: LineChartLayout,
}

impl Default for ProjectionChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_PROJECTION_TITLE.to_owned(),
            axis_labels: AxisLabels::new("", DEFAULT_PROJECTION_Y_AXIS_LABEL),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            layout: LineChartLayout::default(),
        }
    }
}

impl ProjectionChartConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, axis_labels: AxisLabels) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    #[must_use]
    pub fn with_currency_symbol(mut self, currency_symbol: impl Into<String>) -> Self {
        self.currency_symbol = currency_symbol.into();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LineChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Reads a config from JSON; absent fields keep their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config: {e}"))
        })
    }
}

/// Investment projection chart: a data set plus display configuration.
///
/// Chart data and options are derived on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionChart<'a> {
    data_set: &'a ProjectionDataSet,
    config: ProjectionChartConfig,
}

impl ProjectionChart<'static> {
    /// Chart over the bundled data set with the default configuration.
    pub fn bundled() -> ChartResult<Self> {
        Ok(Self::new(
            ProjectionDataSet::bundled()?,
            ProjectionChartConfig::default(),
        ))
    }
}

impl<'a> ProjectionChart<'a> {
    #[must_use]
    pub fn new(data_set: &'a ProjectionDataSet, config: ProjectionChartConfig) -> Self {
        Self { data_set, config }
    }

    #[must_use]
    pub fn config(&self) -> &ProjectionChartConfig {
        &self.config
    }

    #[must_use]
    pub fn data_set(&self) -> &'a ProjectionDataSet {
        self.data_set
    }

    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        let data = process_chart_data(self.data_set.records());
        debug!(labels = data.labels.len(), "mapped projection chart data");
        data
    }

    #[must_use]
    pub fn chart_options(&self) -> ChartOptions {
        build_chart_options(
            &self.config.title,
            &self.config.axis_labels,
            &self.config.currency_symbol,
        )
    }

    /// Presentation over previously derived data and options.
    #[must_use]
    pub fn line_chart<'c>(&self, data: &'c ChartData, options: &'c ChartOptions) -> LineChart<'c> {
        LineChart::new(data, options).with_layout(self.config.layout)
    }
}
