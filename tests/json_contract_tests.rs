use projection_chart::ChartError;
use projection_chart::api::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1, ProjectionChart,
    ProjectionChartConfig,
};

#[test]
fn contract_round_trips_bundled_chart() {
    let chart = ProjectionChart::bundled().expect("bundled chart");
    let contract = ChartConfigJsonContractV1::new(chart.chart_data(), chart.chart_options());
    let json = contract.to_json_pretty().expect("serialize");

    let parsed = ChartConfigJsonContractV1::from_json_str(&json).expect("parse");
    assert_eq!(parsed, contract);
    assert_eq!(parsed.schema_version, CHART_CONFIG_JSON_SCHEMA_V1);
}

#[test]
fn chart_data_serializes_gaps_as_null() {
    let json = r#"[{"yearMonth": "2024-01", "totalDeposit": 1000}]"#;
    let data_set = projection_chart::core::ProjectionDataSet::from_json_str(json).expect("parse");
    let chart = ProjectionChart::new(&data_set, ProjectionChartConfig::default());

    let value: serde_json::Value =
        serde_json::from_str(&chart.chart_data().to_json_pretty().expect("serialize"))
            .expect("valid json");
    assert_eq!(value["labels"][0], "2024-01");
    assert_eq!(value["datasets"][0]["data"][0], 1000.0);
    assert!(value["datasets"][1]["data"][0].is_null());
    assert_eq!(value["datasets"][0]["borderColor"], "rgb(255, 99, 132)");
    assert!(value["datasets"][0].get("borderDash").is_none());
    assert_eq!(value["datasets"][4]["borderDash"][1], 5.0);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let chart = ProjectionChart::bundled().expect("bundled chart");
    let mut contract = ChartConfigJsonContractV1::new(chart.chart_data(), chart.chart_options());
    contract.schema_version = 2;
    let json = contract.to_json_pretty().expect("serialize");

    let err = ChartConfigJsonContractV1::from_json_str(&json).expect_err("version 2");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let config = ProjectionChartConfig::from_json_str(
        r#"{"currencySymbol": "USD", "axisLabels": {"xAxisLabel": "Month"}}"#,
    )
    .expect("parse config");

    assert_eq!(config.currency_symbol, "USD");
    assert_eq!(config.axis_labels.x_axis_label, "Month");
    assert_eq!(config.axis_labels.y_axis_label, "Amount");
    assert_eq!(config.title, ProjectionChartConfig::default().title);

    let err = ProjectionChartConfig::from_json_str("[]").expect_err("not an object");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
