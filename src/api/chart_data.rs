use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Curve tension shared by every projection series.
pub const SERIES_TENSION: f64 = 0.4;

/// The five projection series, in legend and draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKey {
    NetInvestment,
    Bottom10,
    Medium,
    Top75,
    Benchmark,
}

/// Static display style for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStyle {
    pub label: &'static str,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub border_dash: &'static [f64],
    pub tension: f64,
}

const NET_INVESTMENT_STYLE: DatasetStyle = DatasetStyle {
    label: "Net Investment",
    border_color: "rgb(255, 99, 132)",
    background_color: "rgba(255, 99, 132, 0.5)",
    border_dash: &[],
    tension: SERIES_TENSION,
};

const BOTTOM_10_STYLE: DatasetStyle = DatasetStyle {
    label: "Bottom 10% Outcome",
    border_color: "rgb(53, 162, 235)",
    background_color: "rgba(53, 162, 235, 0.5)",
    border_dash: &[],
    tension: SERIES_TENSION,
};

const MEDIUM_STYLE: DatasetStyle = DatasetStyle {
    label: "Medium Outcome",
    border_color: "rgb(75, 192, 192)",
    background_color: "rgba(75, 192, 192, 0.5)",
    border_dash: &[],
    tension: SERIES_TENSION,
};

const TOP_75_STYLE: DatasetStyle = DatasetStyle {
    label: "Top 25% Outcome",
    border_color: "rgb(153, 102, 255)",
    background_color: "rgba(153, 102, 255, 0.5)",
    border_dash: &[],
    tension: SERIES_TENSION,
};

const BENCHMARK_STYLE: DatasetStyle = DatasetStyle {
    label: "2.5% p.a.",
    border_color: "rgb(255, 159, 64)",
    background_color: "rgba(255, 159, 64, 0.5)",
    border_dash: &[5.0, 5.0],
    tension: SERIES_TENSION,
};

impl SeriesKey {
    pub const ALL: [Self; 5] = [
        Self::NetInvestment,
        Self::Bottom10,
        Self::Medium,
        Self::Top75,
        Self::Benchmark,
    ];

    #[must_use]
    pub const fn style(self) -> &'static DatasetStyle {
        match self {
            Self::NetInvestment => &NET_INVESTMENT_STYLE,
            Self::Bottom10 => &BOTTOM_10_STYLE,
            Self::Medium => &MEDIUM_STYLE,
            Self::Top75 => &TOP_75_STYLE,
            Self::Benchmark => &BENCHMARK_STYLE,
        }
    }

    /// Reads this series' value from one record.
    #[must_use]
    pub fn value_of(self, record: &DataPoint) -> Option<f64> {
        let expected = &record.expected_amounts;
        match self {
            Self::NetInvestment => record.total_deposit,
            Self::Bottom10 => expected.bottom_10,
            Self::Medium => expected.median,
            Self::Top75 => expected.top_25,
            Self::Benchmark => expected.benchmark,
        }
    }

    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::NetInvestment => 0,
            Self::Bottom10 => 1,
            Self::Medium => 2,
            Self::Top75 => 3,
            Self::Benchmark => 4,
        }
    }
}

/// One styled series, aligned by index with [`ChartData::labels`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub border_color: String,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<f64>,
    pub tension: f64,
    /// Missing record fields stay `None` and serialize as `null`.
    pub data: Vec<Option<f64>>,
}

impl ChartDataset {
    #[must_use]
    pub fn from_style(style: &DatasetStyle, data: Vec<Option<f64>>) -> Self {
        Self {
            label: style.label.to_owned(),
            border_color: style.border_color.to_owned(),
            background_color: style.background_color.to_owned(),
            border_dash: style.border_dash.to_vec(),
            tension: style.tension,
            data,
        }
    }

    /// Finite values only.
    pub fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flatten().copied().filter(|v| v.is_finite())
    }
}

/// Category labels plus styled series, in the line-chart data schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    #[must_use]
    pub fn dataset(&self, key: SeriesKey) -> Option<&ChartDataset> {
        self.datasets.get(key.position())
    }

    /// `true` when every dataset has one value per label.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|dataset| dataset.data.len() == self.labels.len())
    }

    /// Min and max over all finite series values.
    #[must_use]
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.datasets
            .iter()
            .flat_map(ChartDataset::finite_values)
            .fold(None, |bounds, value| match bounds {
                None => Some((value, value)),
                Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
            })
    }
}

/// Maps raw monthly records into labels and the five styled series.
///
/// Labels keep input order; records are not sorted.
#[must_use]
pub fn process_chart_data(records: &[DataPoint]) -> ChartData {
    let labels = records
        .iter()
        .map(|record| record.year_month.clone())
        .collect();

    let datasets = SeriesKey::ALL
        .iter()
        .map(|key| {
            let data = records.iter().map(|record| key.value_of(record)).collect();
            ChartDataset::from_style(key.style(), data)
        })
        .collect();

    ChartData { labels, datasets }
}
