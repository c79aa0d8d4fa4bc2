//! GTK4 host for the line chart presentation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{ChartData, ChartOptions, LineChart, LineChartLayout};
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, CairoRenderer};

struct ChartWidgetState {
    data: ChartData,
    options: ChartOptions,
    layout: LineChartLayout,
    pointer: Cell<Option<(f64, f64)>>,
    renderer: RefCell<CairoRenderer>,
}

impl ChartWidgetState {
    fn draw(&self, context: &gtk::cairo::Context, width: i32, height: i32) -> ChartResult<()> {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return Ok(());
        };
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Ok(());
        }

        let chart = LineChart::new(&self.data, &self.options).with_layout(self.layout);
        let crosshair = match self.pointer.get() {
            Some((x, y)) => chart.hover(viewport, x, y)?,
            None => None,
        };
        let frame = chart.build_frame(viewport, crosshair)?;
        self.renderer
            .borrow_mut()
            .render_on_cairo_context(context, &frame)
    }
}

/// Drawing area that fills its container and redraws the chart on resize
/// and pointer motion.
pub struct GtkLineChart {
    area: gtk::DrawingArea,
}

impl GtkLineChart {
    pub fn new(data: ChartData, options: ChartOptions, layout: LineChartLayout) -> ChartResult<Self> {
        let state = Rc::new(ChartWidgetState {
            data,
            options,
            layout,
            pointer: Cell::new(None),
            renderer: RefCell::new(CairoRenderer::new(1, 1)?),
        });

        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);
        area.set_halign(gtk::Align::Fill);
        area.set_valign(gtk::Align::Fill);

        let draw_state = Rc::clone(&state);
        area.set_draw_func(move |_, context, width, height| {
            if let Err(err) = draw_state.draw(context, width, height) {
                warn!(error = %err, "line chart draw failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let motion_state = Rc::clone(&state);
        let motion_area = area.downgrade();
        motion.connect_motion(move |_, x, y| {
            motion_state.pointer.set(Some((x, y)));
            if let Some(area) = motion_area.upgrade() {
                area.queue_draw();
            }
        });
        let leave_state = Rc::clone(&state);
        let leave_area = area.downgrade();
        motion.connect_leave(move |_| {
            leave_state.pointer.set(None);
            if let Some(area) = leave_area.upgrade() {
                area.queue_draw();
            }
        });
        area.add_controller(motion);

        Ok(Self { area })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }
}
