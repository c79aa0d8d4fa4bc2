use serde::{Deserialize, Serialize};

use super::format::{format_date_to_month_year, format_tooltip_label, format_y_axis_value};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "S$";
pub const DEFAULT_Y_AXIS_LABEL: &str = "Amount";

const FONT_FAMILY: &str = r#"Pretendard, "Wanted Sans", "Gmarket Sans", Arial, sans-serif"#;

/// Axis titles passed to [`build_chart_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisLabels {
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x_axis_label: String::new(),
            y_axis_label: DEFAULT_Y_AXIS_LABEL.to_owned(),
        }
    }
}

impl AxisLabels {
    #[must_use]
    pub fn new(x_axis_label: impl Into<String>, y_axis_label: impl Into<String>) -> Self {
        Self {
            x_axis_label: x_axis_label.into(),
            y_axis_label: y_axis_label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionMode {
    /// All series at the hovered category index.
    Index,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleKind {
    Category,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Normal,
    Bold,
    Bolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncMode {
    X,
}

// Named formatters standing in for renderer-side callbacks. Each slot has
// its own descriptor type so a formatter can only be used where it fits.

/// Category axis tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryTickFormat {
    /// `"YYYY-MM"` to `"Mon YYYY"`.
    MonthYear,
}

impl CategoryTickFormat {
    #[must_use]
    pub fn apply(self, label: &str) -> String {
        match self {
            Self::MonthYear => format_date_to_month_year(label),
        }
    }
}

/// Value axis tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueTickFormat {
    /// `"{symbol} {abbreviated amount}"`.
    CurrencyAbbreviated,
}

impl ValueTickFormat {
    #[must_use]
    pub fn apply(self, currency_symbol: &str, value: f64) -> String {
        match self {
            Self::CurrencyAbbreviated => {
                format!("{currency_symbol} {}", format_y_axis_value(value))
            }
        }
    }
}

/// Tooltip title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipTitleFormat {
    /// Month and year of the hovered label.
    MonthYear,
}

impl TooltipTitleFormat {
    #[must_use]
    pub fn apply(self, label: &str) -> String {
        match self {
            Self::MonthYear => format_date_to_month_year(label),
        }
    }
}

/// Tooltip body lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipLabelFormat {
    /// `"{dataset label}: S$ {amount}"`.
    CurrencyAmount,
}

impl TooltipLabelFormat {
    #[must_use]
    pub fn apply(self, item: &TooltipItem) -> String {
        match self {
            Self::CurrencyAmount => format_tooltip_label(&item.dataset_label, item.raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub size: f64,
    pub weight: FontWeight,
    pub family: String,
}

impl FontSpec {
    fn new(size: f64, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            family: FONT_FAMILY.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOptions {
    pub mode: InteractionMode,
    pub intersect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub padding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub position: Position,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

/// Hovered series value handed to tooltip formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    /// Category label (`"YYYY-MM"`) of the hovered index.
    pub label: String,
    pub dataset_label: String,
    pub dataset_index: usize,
    pub data_index: usize,
    pub raw: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipCallbacks {
    pub title: TooltipTitleFormat,
    pub label: TooltipLabelFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationOptions {
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub callbacks: TooltipCallbacks,
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: f64,
    pub padding: f64,
    pub box_padding: f64,
    pub body_spacing: f64,
    pub title_font: FontSpec,
    pub body_font: FontSpec,
    pub footer_font: FontSpec,
    pub animation: AnimationOptions,
}

impl TooltipOptions {
    /// Title line for the hovered items: the first item's month and year.
    #[must_use]
    pub fn title(&self, items: &[TooltipItem]) -> String {
        let Some(first) = items.first() else {
            return String::new();
        };
        self.callbacks.title.apply(&first.label)
    }

    /// Body line for one hovered series.
    #[must_use]
    pub fn label(&self, item: &TooltipItem) -> String {
        self.callbacks.label.apply(item)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairLineOptions {
    pub color: String,
    pub width: f64,
    pub dash_pattern: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairSyncOptions {
    pub enabled: bool,
    pub mode: SyncMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairZoomOptions {
    pub enabled: bool,
}

/// Vertical hover guide; cross-chart sync and zoom stay disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairOptions {
    pub enabled: bool,
    pub line: CrosshairLineOptions,
    pub sync: CrosshairSyncOptions,
    pub zoom: CrosshairZoomOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
    pub tooltip: TooltipOptions,
    pub crosshair: CrosshairOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTicks {
    pub auto_skip: bool,
    pub max_ticks_limit: usize,
    pub max_rotation: f64,
    pub min_rotation: f64,
    pub callback: CategoryTickFormat,
}

impl CategoryTicks {
    /// Display text for a category label.
    #[must_use]
    pub fn format_tick(&self, label: &str) -> String {
        self.callback.apply(label)
    }

    /// Indices of the labels kept visible after auto-skipping.
    #[must_use]
    pub fn visible_indices(&self, label_count: usize) -> Vec<usize> {
        if !self.auto_skip || label_count <= self.max_ticks_limit || self.max_ticks_limit == 0 {
            return (0..label_count).collect();
        }
        let step = label_count.div_ceil(self.max_ticks_limit);
        (0..label_count).step_by(step).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearTicks {
    pub callback: ValueTickFormat,
    pub currency_symbol: String,
}

impl LinearTicks {
    /// Display text for a value-axis tick: `"{symbol} {abbreviated amount}"`.
    #[must_use]
    pub fn format_tick(&self, value: f64) -> String {
        self.callback.apply(&self.currency_symbol, value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisOptions {
    #[serde(rename = "type")]
    pub kind: ScaleKind,
    pub display: bool,
    pub title: AxisTitle,
    pub ticks: CategoryTicks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearAxisOptions {
    #[serde(rename = "type")]
    pub kind: ScaleKind,
    pub display: bool,
    pub title: AxisTitle,
    pub begin_at_zero: bool,
    pub ticks: LinearTicks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub x: CategoryAxisOptions,
    pub y: LinearAxisOptions,
}

/// Complete options tree for the projection line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: InteractionOptions,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

/// Assembles chart options for the given title, axis labels and currency.
///
/// Pure: equal arguments always produce equal options.
#[must_use]
pub fn build_chart_options(
    title_text: &str,
    axis_labels: &AxisLabels,
    currency_symbol: &str,
) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        interaction: InteractionOptions {
            mode: InteractionMode::Index,
            intersect: false,
        },
        plugins: PluginOptions {
            legend: LegendOptions {
                position: Position::Top,
                labels: LegendLabels {
                    use_point_style: true,
                    padding: 20.0,
                },
            },
            title: TitleOptions {
                display: true,
                text: title_text.to_owned(),
            },
            tooltip: tooltip_options(),
            crosshair: crosshair_options(),
        },
        scales: ScaleOptions {
            x: CategoryAxisOptions {
                kind: ScaleKind::Category,
                display: true,
                title: AxisTitle {
                    display: true,
                    text: axis_labels.x_axis_label.clone(),
                },
                ticks: CategoryTicks {
                    auto_skip: true,
                    max_ticks_limit: 10,
                    max_rotation: 45.0,
                    min_rotation: 0.0,
                    callback: CategoryTickFormat::MonthYear,
                },
            },
            y: LinearAxisOptions {
                kind: ScaleKind::Linear,
                display: true,
                title: AxisTitle {
                    display: true,
                    text: axis_labels.y_axis_label.clone(),
                },
                begin_at_zero: false,
                ticks: LinearTicks {
                    callback: ValueTickFormat::CurrencyAbbreviated,
                    currency_symbol: currency_symbol.to_owned(),
                },
            },
        },
    }
}

fn tooltip_options() -> TooltipOptions {
    TooltipOptions {
        callbacks: TooltipCallbacks {
            title: TooltipTitleFormat::MonthYear,
            label: TooltipLabelFormat::CurrencyAmount,
        },
        background_color: "rgba(0, 0, 0, 0.8)".to_owned(),
        title_color: "#FFFFFF".to_owned(),
        body_color: "#F7FAFC".to_owned(),
        border_color: "rgba(255, 255, 255, 0.5)".to_owned(),
        border_width: 1.0,
        padding: 10.0,
        box_padding: 8.0,
        body_spacing: 7.0,
        title_font: FontSpec::new(16.0, FontWeight::Bolder),
        body_font: FontSpec::new(14.0, FontWeight::Normal),
        footer_font: FontSpec::new(10.0, FontWeight::Bold),
        animation: AnimationOptions { duration: 200 },
    }
}

fn crosshair_options() -> CrosshairOptions {
    CrosshairOptions {
        enabled: true,
        line: CrosshairLineOptions {
            color: "#3e95cd".to_owned(),
            width: 1.0,
            dash_pattern: vec![5.0, 5.0],
        },
        sync: CrosshairSyncOptions {
            enabled: false,
            mode: SyncMode::X,
        },
        zoom: CrosshairZoomOptions { enabled: false },
    }
}
