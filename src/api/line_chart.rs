use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{LinearScale, PlotArea, Viewport, axis_tick_target_count};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{PluginContext, active_registry};
use crate::interaction::{
    CrosshairState, TooltipContent, category_x, resolve_crosshair, tooltip_content,
};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::{ChartData, ChartDataset, ChartOptions, FontWeight};

const TEXT_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
const GRID_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);
const FALLBACK_SERIES_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);

/// Average glyph advance relative to font size, used for label measurement.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Pixel metrics for the chart layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartLayout {
    pub padding_px: f64,
    /// Caps the chart width; the chart is centered in wider viewports.
    pub max_width_px: Option<f64>,
    pub title_font_px: f64,
    pub legend_font_px: f64,
    pub tick_font_px: f64,
    pub axis_title_font_px: f64,
    pub y_tick_label_width_px: f64,
    pub y_tick_spacing_px: f64,
    pub line_width_px: f64,
    pub point_radius_px: f64,
    /// Straight segments used to approximate each curved interval.
    pub curve_segments: usize,
}

impl Default for LineChartLayout {
    fn default() -> Self {
        Self {
            padding_px: 16.0,
            max_width_px: None,
            title_font_px: 14.0,
            legend_font_px: 12.0,
            tick_font_px: 12.0,
            axis_title_font_px: 12.0,
            y_tick_label_width_px: 72.0,
            y_tick_spacing_px: 40.0,
            line_width_px: 3.0,
            point_radius_px: 3.0,
            curve_segments: 8,
        }
    }
}

impl LineChartLayout {
    #[must_use]
    pub fn with_max_width(mut self, max_width_px: f64) -> Self {
        self.max_width_px = Some(max_width_px);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LegendSlot {
    dataset_index: usize,
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct ChartLayout {
    block_left: f64,
    block_width: f64,
    title_y: Option<f64>,
    legend: Vec<LegendSlot>,
    plot: PlotArea,
    x_ticks: Vec<usize>,
    x_rotation_deg: f64,
    y_scale: LinearScale,
    y_ticks: Vec<f64>,
    /// `false` when the series values could not be scaled to the plot.
    series_in_range: bool,
}

/// Line chart presentation over borrowed data and options.
///
/// Holds no state of its own: every frame is laid out from the inputs, the
/// viewport and the optional hover state.
#[derive(Debug, Clone, Copy)]
pub struct LineChart<'a> {
    data: &'a ChartData,
    options: &'a ChartOptions,
    layout: LineChartLayout,
}

impl<'a> LineChart<'a> {
    #[must_use]
    pub fn new(data: &'a ChartData, options: &'a ChartOptions) -> Self {
        Self {
            data,
            options,
            layout: LineChartLayout::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LineChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn layout(&self) -> LineChartLayout {
        self.layout
    }

    /// Plot rectangle for `viewport`.
    pub fn plot_area(&self, viewport: Viewport) -> ChartResult<PlotArea> {
        Ok(self.compute_layout(viewport)?.plot)
    }

    /// Hover state for a pointer position, `None` outside the plot.
    pub fn hover(&self, viewport: Viewport, x: f64, y: f64) -> ChartResult<Option<CrosshairState>> {
        let plot = self.plot_area(viewport)?;
        Ok(resolve_crosshair(x, y, plot, self.data.labels.len()))
    }

    #[must_use]
    pub fn tooltip(&self, index: usize) -> Option<TooltipContent> {
        tooltip_content(self.data, self.options, index)
    }

    /// Lays out one frame. Fails when plugins are not registered or the
    /// viewport cannot fit a plot.
    pub fn build_frame(
        &self,
        viewport: Viewport,
        crosshair: Option<CrosshairState>,
    ) -> ChartResult<RenderFrame> {
        let registry = active_registry()
            .filter(|registry| registry.supports_line_chart())
            .ok_or(ChartError::PluginsNotRegistered)?;

        let layout = self.compute_layout(viewport)?;
        let mut frame = RenderFrame::new(viewport).with_plot_area(layout.plot);

        self.push_grid(&layout, &mut frame);
        self.push_axes(&layout, &mut frame);
        self.push_title(&layout, &mut frame);
        self.push_legend(&layout, &mut frame);

        if !self.data.is_aligned() {
            debug!(
                labels = self.data.labels.len(),
                "chart data is not aligned with labels; skipping series"
            );
        } else if layout.series_in_range {
            for dataset in &self.data.datasets {
                self.push_series(&layout, dataset, &mut frame)?;
            }
        }

        let context = PluginContext {
            plot_area: layout.plot,
            data: self.data,
            options: self.options,
            crosshair,
        };
        registry.run_after_draw(&context, &mut frame)?;

        if let Some(crosshair) = crosshair {
            self.push_tooltip(viewport, &layout, crosshair, &mut frame);
        }

        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "built line chart frame"
        );
        Ok(frame)
    }

    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        viewport: Viewport,
        crosshair: Option<CrosshairState>,
    ) -> ChartResult<()> {
        let frame = self.build_frame(viewport, crosshair)?;
        renderer.render(&frame)
    }

    fn compute_layout(&self, viewport: Viewport) -> ChartResult<ChartLayout> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let metrics = self.layout;
        let view_width = f64::from(viewport.width);
        let view_height = f64::from(viewport.height);

        let block_width = metrics
            .max_width_px
            .filter(|max| max.is_finite() && *max > 0.0)
            .map_or(view_width, |max| max.min(view_width));
        let block_left = (view_width - block_width) / 2.0;
        let inner_left = block_left + metrics.padding_px;
        let inner_width = block_width - 2.0 * metrics.padding_px;

        let mut cursor_y = metrics.padding_px;
        let title = &self.options.plugins.title;
        let title_y = if title.display && !title.text.is_empty() {
            let y = cursor_y;
            cursor_y += metrics.title_font_px + 10.0;
            Some(y)
        } else {
            None
        };

        // The legend always sits above the plot.
        let (legend, legend_height) = self.legend_slots(inner_left, inner_width, cursor_y);
        cursor_y += legend_height;

        let y_scale_options = &self.options.scales.y;
        let y_title_width = if y_scale_options.title.display && !y_scale_options.title.text.is_empty()
        {
            metrics.axis_title_font_px + 8.0
        } else {
            0.0
        };
        let plot_left = inner_left + y_title_width + metrics.y_tick_label_width_px;
        let plot_width = inner_left + inner_width - plot_left;

        let x_options = &self.options.scales.x;
        let x_ticks = x_options.ticks.visible_indices(self.data.labels.len());
        let widest_x_label = x_ticks
            .iter()
            .filter_map(|index| self.data.labels.get(*index))
            .map(|label| text_width(&x_options.ticks.format_tick(label), metrics.tick_font_px))
            .fold(0.0, f64::max);
        let x_rotation_deg = tick_rotation_deg(
            plot_width / x_ticks.len().max(1) as f64,
            widest_x_label,
            x_options.ticks.min_rotation,
            x_options.ticks.max_rotation,
        );
        let x_tick_height =
            metrics.tick_font_px + widest_x_label * x_rotation_deg.to_radians().sin() + 8.0;
        let x_title_height = if x_options.title.display && !x_options.title.text.is_empty() {
            metrics.axis_title_font_px + 6.0
        } else {
            0.0
        };

        let plot_top = cursor_y;
        let plot_bottom = view_height - metrics.padding_px - x_tick_height - x_title_height;
        let plot = PlotArea::new(plot_left, plot_top, plot_width, plot_bottom - plot_top);
        if !plot.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let (min, max) = self.value_bounds();
        let tick_count = axis_tick_target_count(plot.height, metrics.y_tick_spacing_px, 2, 11);
        let (y_scale, y_ticks, series_in_range) = match LinearScale::nice(min, max, tick_count) {
            Ok((scale, ticks)) => (scale, ticks, true),
            Err(err) => {
                debug!(error = %err, min, max, "value range cannot be scaled; skipping series");
                let (scale, ticks) = LinearScale::nice(0.0, 1.0, tick_count)?;
                (scale, ticks, false)
            }
        };

        Ok(ChartLayout {
            block_left,
            block_width,
            title_y,
            legend,
            plot,
            x_ticks,
            x_rotation_deg,
            y_scale,
            y_ticks,
            series_in_range,
        })
    }

    fn value_bounds(&self) -> (f64, f64) {
        let bounds = self.data.value_bounds().unwrap_or((0.0, 1.0));
        if self.options.scales.y.begin_at_zero {
            (bounds.0.min(0.0), bounds.1.max(0.0))
        } else {
            bounds
        }
    }

    // Legend entries wrap into rows that are centered horizontally.
    fn legend_slots(&self, inner_left: f64, inner_width: f64, top: f64) -> (Vec<LegendSlot>, f64) {
        let font = self.layout.legend_font_px;
        let gap = self.options.plugins.legend.labels.padding;
        let row_height = font + 10.0;

        let mut rows: Vec<Vec<(usize, f64)>> = Vec::new();
        let mut row_width = 0.0;
        for (index, dataset) in self.data.datasets.iter().enumerate() {
            let entry_width = legend_entry_width(&dataset.label, font);
            let needed = if row_width > 0.0 { gap + entry_width } else { entry_width };
            match rows.last_mut() {
                Some(row) if row_width + needed <= inner_width => {
                    row.push((index, entry_width));
                    row_width += needed;
                }
                _ => {
                    rows.push(vec![(index, entry_width)]);
                    row_width = entry_width;
                }
            }
        }

        let mut slots = Vec::with_capacity(self.data.datasets.len());
        for (row_index, row) in rows.iter().enumerate() {
            let total: f64 =
                row.iter().map(|(_, width)| width).sum::<f64>() + gap * (row.len() - 1) as f64;
            let mut x = inner_left + (inner_width - total) / 2.0;
            let y = top + row_height * row_index as f64;
            for (dataset_index, width) in row {
                slots.push(LegendSlot {
                    dataset_index: *dataset_index,
                    x,
                    y,
                });
                x += width + gap;
            }
        }
        (slots, row_height * rows.len() as f64)
    }

    fn push_grid(&self, layout: &ChartLayout, frame: &mut RenderFrame) {
        let plot = layout.plot;
        for tick in &layout.y_ticks {
            let Ok(y) = layout.y_scale.domain_to_pixel(*tick, plot.bottom(), plot.top) else {
                continue;
            };
            frame.push_line(LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                1.0,
                GRID_COLOR,
            ));
        }
        let len = self.data.labels.len();
        for index in &layout.x_ticks {
            let x = category_x(plot, *index, len);
            frame.push_line(LinePrimitive::new(
                x,
                plot.top,
                x,
                plot.bottom(),
                1.0,
                GRID_COLOR,
            ));
        }
    }

    fn push_axes(&self, layout: &ChartLayout, frame: &mut RenderFrame) {
        let metrics = self.layout;
        let plot = layout.plot;
        let scales = &self.options.scales;

        if scales.y.display {
            for tick in &layout.y_ticks {
                let Ok(y) = layout.y_scale.domain_to_pixel(*tick, plot.bottom(), plot.top) else {
                    continue;
                };
                frame.push_text(TextPrimitive::new(
                    scales.y.ticks.format_tick(*tick),
                    plot.left - 8.0,
                    y - metrics.tick_font_px / 2.0,
                    metrics.tick_font_px,
                    TEXT_COLOR,
                    TextHAlign::Right,
                ));
            }
            if scales.y.title.display {
                frame.push_text(
                    TextPrimitive::new(
                        scales.y.title.text.clone(),
                        layout.block_left + metrics.padding_px,
                        plot.top + plot.height / 2.0,
                        metrics.axis_title_font_px,
                        TEXT_COLOR,
                        TextHAlign::Center,
                    )
                    .with_rotation(-90.0),
                );
            }
        }

        if scales.x.display {
            let len = self.data.labels.len();
            let (align, rotation) = if layout.x_rotation_deg > 0.0 {
                (TextHAlign::Right, -layout.x_rotation_deg)
            } else {
                (TextHAlign::Center, 0.0)
            };
            for index in &layout.x_ticks {
                let Some(label) = self.data.labels.get(*index) else {
                    continue;
                };
                frame.push_text(
                    TextPrimitive::new(
                        scales.x.ticks.format_tick(label),
                        category_x(plot, *index, len),
                        plot.bottom() + 6.0,
                        metrics.tick_font_px,
                        TEXT_COLOR,
                        align,
                    )
                    .with_rotation(rotation),
                );
            }
            if scales.x.title.display {
                frame.push_text(TextPrimitive::new(
                    scales.x.title.text.clone(),
                    plot.left + plot.width / 2.0,
                    f64::from(frame.viewport.height)
                        - metrics.padding_px
                        - metrics.axis_title_font_px,
                    metrics.axis_title_font_px,
                    TEXT_COLOR,
                    TextHAlign::Center,
                ));
            }
        }
    }

    fn push_title(&self, layout: &ChartLayout, frame: &mut RenderFrame) {
        let Some(y) = layout.title_y else {
            return;
        };
        frame.push_text(
            TextPrimitive::new(
                self.options.plugins.title.text.clone(),
                layout.block_left + layout.block_width / 2.0,
                y,
                self.layout.title_font_px,
                TEXT_COLOR,
                TextHAlign::Center,
            )
            .with_bold(true),
        );
    }

    fn push_legend(&self, layout: &ChartLayout, frame: &mut RenderFrame) {
        let font = self.layout.legend_font_px;
        let use_point_style = self.options.plugins.legend.labels.use_point_style;
        for slot in &layout.legend {
            let Some(dataset) = self.data.datasets.get(slot.dataset_index) else {
                continue;
            };
            let marker = RectPrimitive::new(
                slot.x,
                slot.y,
                font,
                font,
                css_color(&dataset.background_color),
            )
            .with_border(1.0, css_color(&dataset.border_color));
            let marker = if use_point_style {
                marker.with_corner_radius(font / 2.0)
            } else {
                marker
            };
            frame.push_rect(marker);
            frame.push_text(TextPrimitive::new(
                dataset.label.clone(),
                slot.x + font + 6.0,
                slot.y,
                font,
                TEXT_COLOR,
                TextHAlign::Left,
            ));
        }
    }

    fn push_series(
        &self,
        layout: &ChartLayout,
        dataset: &ChartDataset,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let plot = layout.plot;
        let len = dataset.data.len();
        let border = css_color(&dataset.border_color);
        let fill = css_color(&dataset.background_color);
        let stroke = LineStrokeStyle::from_pattern(&dataset.border_dash);

        let mut projected = Vec::with_capacity(len);
        for (index, value) in dataset.data.iter().enumerate() {
            let point = match value {
                Some(value) if value.is_finite() => {
                    let y = layout.y_scale.domain_to_pixel(*value, plot.bottom(), plot.top)?;
                    Some((category_x(plot, index, len), y))
                }
                _ => None,
            };
            projected.push(point);
        }

        // Missing values split the series into independent runs.
        for run in projected.split(Option::is_none) {
            let points: Vec<(f64, f64)> = run.iter().flatten().copied().collect();
            for (x1, y1, x2, y2) in curve_segments(
                &points,
                dataset.tension,
                self.layout.curve_segments,
                plot,
            ) {
                frame.push_line(
                    LinePrimitive::new(x1, y1, x2, y2, self.layout.line_width_px, border)
                        .with_stroke_style(stroke),
                );
            }
        }

        let radius = self.layout.point_radius_px;
        if radius > 0.0 {
            for (x, y) in projected.iter().flatten() {
                frame.push_rect(
                    RectPrimitive::new(x - radius, y - radius, radius * 2.0, radius * 2.0, fill)
                        .with_border(1.0, border)
                        .with_corner_radius(radius),
                );
            }
        }
        Ok(())
    }

    fn push_tooltip(
        &self,
        viewport: Viewport,
        layout: &ChartLayout,
        crosshair: CrosshairState,
        frame: &mut RenderFrame,
    ) {
        let Some(content) = self.tooltip(crosshair.index) else {
            return;
        };
        let tooltip = &self.options.plugins.tooltip;
        let title_px = tooltip.title_font.size;
        let body_px = tooltip.body_font.size;
        let swatch = body_px;

        let text_block_width = content
            .lines
            .iter()
            .map(|line| swatch + tooltip.box_padding + text_width(line, body_px))
            .chain(std::iter::once(text_width(&content.title, title_px)))
            .fold(0.0, f64::max);
        let width = text_block_width + tooltip.padding * 2.0;
        let lines = content.lines.len() as f64;
        let height = tooltip.padding * 2.0
            + title_px
            + 6.0
            + lines * body_px
            + (lines - 1.0).max(0.0) * tooltip.body_spacing;

        let view_width = f64::from(viewport.width);
        let x = if crosshair.x + 12.0 + width <= view_width {
            crosshair.x + 12.0
        } else {
            (crosshair.x - 12.0 - width).max(0.0)
        };
        let max_y = (f64::from(viewport.height) - height).max(0.0);
        let y = (crosshair.pointer_y - height / 2.0).clamp(layout.plot.top.min(max_y), max_y);

        frame.push_rect(
            RectPrimitive::new(x, y, width, height, css_color(&tooltip.background_color))
                .with_border(tooltip.border_width, css_color(&tooltip.border_color))
                .with_corner_radius(6.0),
        );

        let title_color = css_color(&tooltip.title_color);
        let body_color = css_color(&tooltip.body_color);
        let mut cursor_y = y + tooltip.padding;
        frame.push_text(
            TextPrimitive::new(
                content.title,
                x + tooltip.padding,
                cursor_y,
                title_px,
                title_color,
                TextHAlign::Left,
            )
            .with_bold(tooltip.title_font.weight != FontWeight::Normal),
        );
        cursor_y += title_px + 6.0;

        for (line, dataset) in content.lines.into_iter().zip(&self.data.datasets) {
            frame.push_rect(
                RectPrimitive::new(
                    x + tooltip.padding,
                    cursor_y,
                    swatch,
                    swatch,
                    css_color(&dataset.background_color),
                )
                .with_border(1.0, css_color(&dataset.border_color)),
            );
            frame.push_text(TextPrimitive::new(
                line,
                x + tooltip.padding + swatch + tooltip.box_padding,
                cursor_y,
                body_px,
                body_color,
                TextHAlign::Left,
            ));
            cursor_y += body_px + tooltip.body_spacing;
        }
    }
}

fn text_width(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * GLYPH_WIDTH_RATIO
}

fn legend_entry_width(label: &str, font_px: f64) -> f64 {
    font_px + 6.0 + text_width(label, font_px)
}

fn css_color(text: &str) -> Color {
    Color::from_css(text).unwrap_or_else(|err| {
        debug!(color = text, error = %err, "falling back to neutral series color");
        FALLBACK_SERIES_COLOR
    })
}

/// Label rotation needed so the widest label fits the per-tick spacing.
fn tick_rotation_deg(spacing_px: f64, widest_px: f64, min_deg: f64, max_deg: f64) -> f64 {
    let (min_deg, max_deg) = (min_deg.min(max_deg), max_deg.max(min_deg));
    if widest_px <= 0.0 || spacing_px <= 0.0 || widest_px <= spacing_px {
        return min_deg;
    }
    (spacing_px / widest_px)
        .acos()
        .to_degrees()
        .clamp(min_deg, max_deg)
}

/// Approximates a tensioned curve through `points` with straight segments.
///
/// Control points follow the cardinal-spline construction and are capped to
/// the plot area so curves never leave it.
fn curve_segments(
    points: &[(f64, f64)],
    tension: f64,
    steps: usize,
    plot: PlotArea,
) -> Vec<(f64, f64, f64, f64)> {
    if points.len() < 2 {
        return Vec::new();
    }
    if tension <= 0.0 || steps <= 1 {
        return points
            .windows(2)
            .map(|pair| (pair[0].0, pair[0].1, pair[1].0, pair[1].1))
            .collect();
    }

    let cap = |(x, y): (f64, f64)| (x.clamp(plot.left, plot.right()), y.clamp(plot.top, plot.bottom()));
    let controls: Vec<((f64, f64), (f64, f64))> = (0..points.len())
        .map(|index| {
            let current = points[index];
            let previous = if index == 0 { current } else { points[index - 1] };
            let next = points.get(index + 1).copied().unwrap_or(current);
            let (before, after) = spline_control_points(previous, current, next, tension);
            (cap(before), cap(after))
        })
        .collect();

    let mut segments = Vec::with_capacity((points.len() - 1) * steps);
    for index in 0..points.len() - 1 {
        let start = points[index];
        let end = points[index + 1];
        let c1 = controls[index].1;
        let c2 = controls[index + 1].0;
        let mut last = start;
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let point = cubic_bezier(start, c1, c2, end, t);
            segments.push((last.0, last.1, point.0, point.1));
            last = point;
        }
    }
    segments
}

fn spline_control_points(
    previous: (f64, f64),
    current: (f64, f64),
    next: (f64, f64),
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let distance = |a: (f64, f64), b: (f64, f64)| ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
    let d01 = distance(previous, current);
    let d12 = distance(current, next);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.0 - previous.0;
    let dy = next.1 - previous.1;
    (
        (current.0 - fa * dx, current.1 - fa * dy),
        (current.0 + fb * dx, current.1 + fb * dy),
    )
}

fn cubic_bezier(
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}
