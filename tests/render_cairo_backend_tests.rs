#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use projection_chart::core::Viewport;
use projection_chart::render::{CairoContextRenderer, CairoRenderer, Renderer};
use projection_chart::{ChartError, ProjectionChart, register_chart_plugins};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_projection_frame() {
    register_chart_plugins();
    let chart = ProjectionChart::bundled().expect("bundled chart");
    let data = chart.chart_data();
    let options = chart.chart_options();
    let frame = chart
        .line_chart(&data, &options)
        .build_frame(Viewport::new(900, 500), None)
        .expect("frame");

    let mut renderer = CairoRenderer::new(900, 500).expect("renderer");
    Renderer::render(&mut renderer, &frame).expect("render");
    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, frame.lines.len());
    assert_eq!(stats.rects_drawn, frame.rects.len());
    assert_eq!(stats.texts_drawn, frame.texts.len());

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    register_chart_plugins();
    let chart = ProjectionChart::bundled().expect("bundled chart");
    let data = chart.chart_data();
    let options = chart.chart_options();
    let line_chart = chart.line_chart(&data, &options);
    let viewport = Viewport::new(600, 320);
    let plot = line_chart.plot_area(viewport).expect("plot");
    let crosshair = line_chart
        .hover(viewport, plot.left + 10.0, plot.top + 10.0)
        .expect("hover");
    let frame = line_chart.build_frame(viewport, crosshair).expect("frame");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut renderer = CairoRenderer::new(1, 1).expect("renderer");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on external context");
    assert_eq!(renderer.last_stats().texts_drawn, frame.texts.len());
}
