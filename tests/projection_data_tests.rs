use projection_chart::ChartError;
use projection_chart::core::ProjectionDataSet;

#[test]
fn bundled_data_set_is_monthly_and_complete() {
    let data_set = ProjectionDataSet::bundled().expect("bundled data");
    assert!(!data_set.is_empty());

    let months: Vec<_> = data_set
        .records()
        .iter()
        .map(|record| record.month_start().expect("valid month"))
        .collect();
    assert!(months.windows(2).all(|pair| pair[0] < pair[1]));

    for record in data_set {
        assert!(record.total_deposit.is_some_and(f64::is_finite));
        let expected = record.expected_amounts;
        for value in [
            expected.bottom_10,
            expected.median,
            expected.top_25,
            expected.benchmark,
        ] {
            assert!(value.is_some_and(f64::is_finite));
        }
    }
}

#[test]
fn bundled_data_set_is_parsed_once() {
    let first = ProjectionDataSet::bundled().expect("bundled data");
    let second = ProjectionDataSet::bundled().expect("bundled data");
    assert!(std::ptr::eq(first, second));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = ProjectionDataSet::from_json_str("{not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ProjectionDataSet::from_json_str(r#"{"yearMonth": "2024-01"}"#)
        .expect_err("object is not an array");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn irregular_months_are_kept() {
    let json = r#"[
        {"yearMonth": "2024-02", "totalDeposit": 1},
        {"yearMonth": "2024-01", "totalDeposit": 2},
        {"yearMonth": "not-a-month", "totalDeposit": 3}
    ]"#;
    let data_set = ProjectionDataSet::from_json_str(json).expect("parse");
    assert_eq!(data_set.len(), 3);
    assert_eq!(data_set.records()[2].month_start(), None);
}

#[test]
fn month_start_rejects_invalid_months() {
    let json = r#"[{"yearMonth": "2024-13"}, {"yearMonth": "2024-1"}, {"yearMonth": "2024-12"}]"#;
    let data_set = ProjectionDataSet::from_json_str(json).expect("parse");
    let parsed: Vec<bool> = data_set
        .records()
        .iter()
        .map(|record| record.month_start().is_some())
        .collect();
    assert_eq!(parsed, vec![false, false, true]);
}
