use projection_chart::api::{AxisLabels, LineChart, build_chart_options, process_chart_data};
use projection_chart::core::{DataPoint, ExpectedAmounts, Viewport};
use projection_chart::register_chart_plugins;
use projection_chart::render::{NullRenderer, Renderer};
use proptest::prelude::*;

fn any_finite() -> impl Strategy<Value = f64> {
    use prop::num::f64::{NEGATIVE, NORMAL, POSITIVE, ZERO};
    POSITIVE | NEGATIVE | NORMAL | ZERO
}

fn any_amount() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(any_finite())
}

fn data_point() -> impl Strategy<Value = DataPoint> {
    (
        1u32..=12,
        any_amount(),
        any_amount(),
        any_amount(),
        any_amount(),
        any_amount(),
    )
        .prop_map(|(month, deposit, bottom, median, top, benchmark)| DataPoint {
            year_month: format!("2024-{month:02}"),
            total_deposit: deposit,
            expected_amounts: ExpectedAmounts {
                bottom_10: bottom,
                median,
                top_25: top,
                benchmark,
            },
        })
}

fn render(records: &[DataPoint], viewport: Viewport, pointer: Option<(f64, f64)>) {
    register_chart_plugins();
    let data = process_chart_data(records);
    let options = build_chart_options("Projection", &AxisLabels::default(), "S$");
    let chart = LineChart::new(&data, &options);

    let crosshair = pointer.and_then(|(x, y)| chart.hover(viewport, x, y).ok().flatten());
    let frame = chart
        .build_frame(viewport, crosshair)
        .expect("aligned data always lays out");
    NullRenderer::default()
        .render(&frame)
        .expect("frame geometry is finite");
}

proptest! {
    #[test]
    fn frames_build_for_any_finite_amounts(
        records in prop::collection::vec(data_point(), 0..24),
        pointer_x in 0.0f64..900.0,
        pointer_y in 0.0f64..500.0
    ) {
        render(&records, Viewport::new(900, 500), Some((pointer_x, pointer_y)));
    }

    #[test]
    fn frames_build_for_any_single_record(record in data_point()) {
        render(&[record], Viewport::new(640, 360), Some((320.0, 180.0)));
    }
}

#[test]
fn frames_build_for_degenerate_ranges() {
    let blank = DataPoint {
        year_month: "2024-01".to_owned(),
        ..DataPoint::default()
    };
    let extreme = |value: f64| {
        DataPoint::new(
            "2024-02",
            value,
            ExpectedAmounts::new(value, value, value, value),
        )
    };

    render(&[blank.clone(), blank.clone()], Viewport::new(900, 500), None);
    render(&[extreme(f64::MAX)], Viewport::new(900, 500), Some((450.0, 250.0)));
    render(&[extreme(-f64::MAX), extreme(f64::MAX)], Viewport::new(900, 500), None);
    render(&[extreme(f64::MIN_POSITIVE), extreme(0.0)], Viewport::new(900, 500), None);
    render(&[blank, extreme(-1e308), extreme(1e308)], Viewport::new(900, 500), None);
}
