use serde::{Deserialize, Serialize};

use crate::api::{ChartData, ChartOptions, TooltipItem};
use crate::core::PlotArea;

/// Hover state for index-mode interaction: one category index shared by all
/// series, plus the x position of the vertical guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairState {
    pub index: usize,
    pub x: f64,
    pub pointer_y: f64,
}

/// Tooltip text for one hovered index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<String>,
}

/// Pixel x of category `index` out of `len` inside the plot.
///
/// A single category sits in the middle of the plot.
#[must_use]
pub fn category_x(plot: PlotArea, index: usize, len: usize) -> f64 {
    if len <= 1 {
        return plot.left + plot.width / 2.0;
    }
    plot.left + plot.width * (index as f64) / ((len - 1) as f64)
}

/// Nearest category index for pointer `x`.
///
/// There is no intersection requirement: any x inside the plot selects the
/// closest index. Returns `None` outside the plot or without categories.
#[must_use]
pub fn resolve_hover_index(x: f64, plot: PlotArea, len: usize) -> Option<usize> {
    if len == 0 || !x.is_finite() || x < plot.left || x > plot.right() || plot.width <= 0.0 {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    let ratio = (x - plot.left) / plot.width;
    let index = (ratio * (len - 1) as f64).round() as usize;
    Some(index.min(len - 1))
}

/// Resolves hover for a pointer position; `None` when the pointer is outside
/// the plot.
#[must_use]
pub fn resolve_crosshair(x: f64, y: f64, plot: PlotArea, len: usize) -> Option<CrosshairState> {
    if !plot.contains(x, y) {
        return None;
    }
    let index = resolve_hover_index(x, plot, len)?;
    Some(CrosshairState {
        index,
        x: category_x(plot, index, len),
        pointer_y: y,
    })
}

/// Hovered items at `index`, one per dataset in dataset order.
#[must_use]
pub fn tooltip_items(data: &ChartData, index: usize) -> Vec<TooltipItem> {
    let Some(label) = data.labels.get(index) else {
        return Vec::new();
    };
    data.datasets
        .iter()
        .enumerate()
        .map(|(dataset_index, dataset)| TooltipItem {
            label: label.clone(),
            dataset_label: dataset.label.clone(),
            dataset_index,
            data_index: index,
            raw: dataset.data.get(index).copied().flatten(),
        })
        .collect()
}

/// Tooltip title and body lines for the hovered index.
#[must_use]
pub fn tooltip_content(
    data: &ChartData,
    options: &ChartOptions,
    index: usize,
) -> Option<TooltipContent> {
    let items = tooltip_items(data, index);
    if items.is_empty() {
        return None;
    }
    let tooltip = &options.plugins.tooltip;
    Some(TooltipContent {
        title: tooltip.title(&items),
        lines: items.iter().map(|item| tooltip.label(item)).collect(),
    })
}
