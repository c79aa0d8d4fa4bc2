use criterion::{Criterion, criterion_group, criterion_main};
use projection_chart::api::{
    format_currency_value, format_date_to_month_year, format_tooltip_label,
};
use projection_chart::core::{ProjectionDataSet, Viewport};
use projection_chart::render::NullRenderer;
use projection_chart::{ProjectionChart, process_chart_data, register_chart_plugins};
use std::hint::black_box;

fn bench_currency_formatting(c: &mut Criterion) {
    let values: Vec<f64> = (0..1_000).map(|i| f64::from(i) * 1_234.567).collect();

    c.bench_function("format_currency_value_1k", |b| {
        b.iter(|| {
            for value in &values {
                let _ = format_currency_value(black_box(*value), 2);
            }
        })
    });

    c.bench_function("format_tooltip_label", |b| {
        b.iter(|| format_tooltip_label(black_box("Medium Outcome"), black_box(168_963.73)))
    });

    c.bench_function("format_date_to_month_year", |b| {
        b.iter(|| format_date_to_month_year(black_box("2030-07")))
    });
}

fn bench_process_bundled_data(c: &mut Criterion) {
    let data_set = ProjectionDataSet::bundled().expect("bundled data");

    c.bench_function("process_chart_data_bundled", |b| {
        b.iter(|| process_chart_data(black_box(data_set.records())))
    });
}

fn bench_build_frame(c: &mut Criterion) {
    register_chart_plugins();
    let chart = ProjectionChart::bundled().expect("bundled chart");
    let data = chart.chart_data();
    let options = chart.chart_options();
    let line_chart = chart.line_chart(&data, &options);
    let viewport = Viewport::new(1280, 720);
    let mut renderer = NullRenderer::default();

    c.bench_function("line_chart_render_null_1280x720", |b| {
        b.iter(|| {
            line_chart
                .render(&mut renderer, black_box(viewport), None)
                .expect("render")
        })
    });
}

criterion_group!(
    benches,
    bench_currency_formatting,
    bench_process_bundled_data,
    bench_build_frame
);
criterion_main!(benches);
