use projection_chart::api::{SeriesKey, process_chart_data};
use projection_chart::core::{DataPoint, ExpectedAmounts};
use proptest::prelude::*;

fn optional_amount() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(-1e9f64..1e9)
}

fn data_point() -> impl Strategy<Value = DataPoint> {
    (
        2000u32..2100,
        1u32..=12,
        optional_amount(),
        optional_amount(),
        optional_amount(),
        optional_amount(),
        optional_amount(),
    )
        .prop_map(|(year, month, deposit, bottom, median, top, benchmark)| DataPoint {
            year_month: format!("{year}-{month:02}"),
            total_deposit: deposit,
            expected_amounts: ExpectedAmounts {
                bottom_10: bottom,
                median,
                top_25: top,
                benchmark,
            },
        })
}

proptest! {
    #[test]
    fn every_series_aligns_with_labels(records in prop::collection::vec(data_point(), 0..64)) {
        let data = process_chart_data(&records);

        prop_assert_eq!(data.datasets.len(), 5);
        prop_assert!(data.is_aligned());
        prop_assert_eq!(data.labels.len(), records.len());
        for (label, record) in data.labels.iter().zip(&records) {
            prop_assert_eq!(label, &record.year_month);
        }
    }

    #[test]
    fn series_values_are_copied_verbatim(records in prop::collection::vec(data_point(), 1..32)) {
        let data = process_chart_data(&records);
        for key in SeriesKey::ALL {
            let dataset = data.dataset(key).expect("dataset present");
            prop_assert_eq!(dataset.label.as_str(), key.style().label);
            for (value, record) in dataset.data.iter().zip(&records) {
                prop_assert_eq!(*value, key.value_of(record));
            }
        }
    }

    #[test]
    fn mapping_is_deterministic(records in prop::collection::vec(data_point(), 0..16)) {
        prop_assert_eq!(process_chart_data(&records), process_chart_data(&records));
    }
}
