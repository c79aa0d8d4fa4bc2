use projection_chart::api::{SeriesKey, process_chart_data};
use projection_chart::core::{DataPoint, ExpectedAmounts, ProjectionDataSet};

fn record(year_month: &str, deposit: f64, expected: [f64; 4]) -> DataPoint {
    DataPoint::new(
        year_month,
        deposit,
        ExpectedAmounts::new(expected[0], expected[1], expected[2], expected[3]),
    )
}

#[test]
fn single_record_maps_to_five_single_value_series() {
    let records = vec![record("2024-01", 1000.0, [900.0, 1200.0, 1500.0, 1025.0])];
    let data = process_chart_data(&records);

    assert_eq!(data.labels, vec!["2024-01".to_owned()]);
    let series: Vec<Vec<Option<f64>>> = data.datasets.iter().map(|d| d.data.clone()).collect();
    assert_eq!(
        series,
        vec![
            vec![Some(1000.0)],
            vec![Some(900.0)],
            vec![Some(1200.0)],
            vec![Some(1500.0)],
            vec![Some(1025.0)],
        ]
    );
}

#[test]
fn datasets_follow_fixed_order_and_styles() {
    let data = process_chart_data(&[]);
    let labels: Vec<&str> = data.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Net Investment",
            "Bottom 10% Outcome",
            "Medium Outcome",
            "Top 25% Outcome",
            "2.5% p.a.",
        ]
    );
    assert!(data.labels.is_empty());
    assert!(data.datasets.iter().all(|d| d.data.is_empty()));
    assert!(data.datasets.iter().all(|d| d.tension == 0.4));

    let benchmark = data.dataset(SeriesKey::Benchmark).expect("benchmark");
    assert_eq!(benchmark.border_dash, vec![5.0, 5.0]);
    assert_eq!(benchmark.border_color, "rgb(255, 159, 64)");
    let net = data.dataset(SeriesKey::NetInvestment).expect("net investment");
    assert!(net.border_dash.is_empty());
    assert_eq!(net.background_color, "rgba(255, 99, 132, 0.5)");
}

#[test]
fn labels_keep_input_order_without_sorting() {
    let records = vec![
        record("2024-03", 3.0, [3.0; 4]),
        record("2024-01", 1.0, [1.0; 4]),
        record("2024-02", 2.0, [2.0; 4]),
    ];
    let data = process_chart_data(&records);
    assert_eq!(data.labels, vec!["2024-03", "2024-01", "2024-02"]);
    assert_eq!(
        data.dataset(SeriesKey::NetInvestment).expect("net").data,
        vec![Some(3.0), Some(1.0), Some(2.0)]
    );
}

#[test]
fn missing_fields_become_gaps_not_errors() {
    let json = r#"[
        {"yearMonth": "2024-01", "totalDeposit": 1000, "expectedAmounts": {"10": 900, "50": 1200, "75": 1500, "benchmark": 1025}},
        {"yearMonth": "2024-02", "expectedAmounts": {"10": 950, "75": null}},
        {"yearMonth": "2024-03", "totalDeposit": 3000}
    ]"#;
    let data_set = ProjectionDataSet::from_json_str(json).expect("parse records");
    let data = process_chart_data(data_set.records());

    assert_eq!(data.labels.len(), 3);
    assert!(data.is_aligned());
    assert_eq!(
        data.dataset(SeriesKey::NetInvestment).expect("net").data,
        vec![Some(1000.0), None, Some(3000.0)]
    );
    assert_eq!(
        data.dataset(SeriesKey::Bottom10).expect("bottom").data,
        vec![Some(900.0), Some(950.0), None]
    );
    assert_eq!(
        data.dataset(SeriesKey::Top75).expect("top").data,
        vec![Some(1500.0), None, None]
    );
}

#[test]
fn value_bounds_ignore_gaps() {
    let json = r#"[
        {"yearMonth": "2024-01", "totalDeposit": 1000, "expectedAmounts": {"10": 900}},
        {"yearMonth": "2024-02", "totalDeposit": 2000, "expectedAmounts": {"75": 2600}}
    ]"#;
    let data_set = ProjectionDataSet::from_json_str(json).expect("parse records");
    let data = process_chart_data(data_set.records());
    assert_eq!(data.value_bounds(), Some((900.0, 2600.0)));
}

#[test]
fn series_keys_map_to_dataset_positions() {
    for (position, key) in SeriesKey::ALL.iter().enumerate() {
        assert_eq!(key.position(), position);
    }
}
