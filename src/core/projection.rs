use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

const BUNDLED_INVESTMENT_JSON: &str = include_str!("../../data/investment.json");

static BUNDLED: OnceLock<ProjectionDataSet> = OnceLock::new();

/// Pre-computed projected amounts for one month.
///
/// Keys follow the upstream percentile naming (`"10"`, `"50"`, `"75"`).
/// Absent or `null` fields deserialize to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedAmounts {
    #[serde(rename = "10")]
    pub bottom_10: Option<f64>,
    #[serde(rename = "50")]
    pub median: Option<f64>,
    #[serde(rename = "75")]
    pub top_25: Option<f64>,
    pub benchmark: Option<f64>,
}

/// One monthly snapshot of the projection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPoint {
    /// Month in `YYYY-MM` form.
    pub year_month: String,
    pub total_deposit: Option<f64>,
    pub expected_amounts: ExpectedAmounts,
}

impl DataPoint {
    #[must_use]
    pub fn new(year_month: impl Into<String>, total_deposit: f64, expected: ExpectedAmounts) -> Self {
        Self {
            year_month: year_month.into(),
            total_deposit: Some(total_deposit),
            expected_amounts: expected,
        }
    }

    /// Parses `year_month` as the first day of that month.
    #[must_use]
    pub fn month_start(&self) -> Option<NaiveDate> {
        if self.year_month.len() != 7 {
            return None;
        }
        NaiveDate::parse_from_str(&format!("{}-01", self.year_month), "%Y-%m-%d").ok()
    }
}

impl ExpectedAmounts {
    #[must_use]
    pub fn new(bottom_10: f64, median: f64, top_25: f64, benchmark: f64) -> Self {
        Self {
            bottom_10: Some(bottom_10),
            median: Some(median),
            top_25: Some(top_25),
            benchmark: Some(benchmark),
        }
    }
}

/// Immutable, ordered collection of monthly projection records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectionDataSet {
    records: Vec<DataPoint>,
}

impl ProjectionDataSet {
    #[must_use]
    pub fn new(records: Vec<DataPoint>) -> Self {
        let data_set = Self { records };
        data_set.report_irregular_months();
        data_set
    }

    /// Parses a JSON array of records.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let records: Vec<DataPoint> = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse projection records: {e}"))
        })?;
        debug!(records = records.len(), "parsed projection records");
        Ok(Self::new(records))
    }

    /// Returns the data set shipped with the crate, parsed on first use.
    pub fn bundled() -> ChartResult<&'static Self> {
        if let Some(data_set) = BUNDLED.get() {
            return Ok(data_set);
        }
        let parsed = Self::from_json_str(BUNDLED_INVESTMENT_JSON)?;
        Ok(BUNDLED.get_or_init(|| parsed))
    }

    #[must_use]
    pub fn records(&self) -> &[DataPoint] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Irregular records are kept as-is; the chart shows them in input order.
    fn report_irregular_months(&self) {
        let mut previous: Option<NaiveDate> = None;
        for (index, record) in self.records.iter().enumerate() {
            let Some(month) = record.month_start() else {
                warn!(index, year_month = %record.year_month, "record month is not YYYY-MM");
                continue;
            };
            if previous.is_some_and(|prev| month <= prev) {
                warn!(index, year_month = %record.year_month, "record month is out of order");
            }
            previous = Some(month);
        }
    }
}

impl<'a> IntoIterator for &'a ProjectionDataSet {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
