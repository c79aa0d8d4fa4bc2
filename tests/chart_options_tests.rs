use projection_chart::api::{
    AxisLabels, CategoryTickFormat, ChartOptions, DEFAULT_CURRENCY_SYMBOL, InteractionMode,
    Position, ScaleKind, TooltipItem, TooltipLabelFormat, TooltipTitleFormat, ValueTickFormat,
    build_chart_options,
};

#[test]
fn default_axis_labels_use_amount_title() {
    let labels = AxisLabels::default();
    assert_eq!(labels.x_axis_label, "");
    assert_eq!(labels.y_axis_label, "Amount");
}

#[test]
fn options_carry_title_axes_and_interaction() {
    let options = build_chart_options(
        "Projection",
        &AxisLabels::new("Month", "Amount (SGD)"),
        DEFAULT_CURRENCY_SYMBOL,
    );

    assert!(options.responsive);
    assert!(!options.maintain_aspect_ratio);
    assert_eq!(options.interaction.mode, InteractionMode::Index);
    assert!(!options.interaction.intersect);

    assert!(options.plugins.title.display);
    assert_eq!(options.plugins.title.text, "Projection");
    assert_eq!(options.plugins.legend.position, Position::Top);
    assert!(options.plugins.legend.labels.use_point_style);
    assert_eq!(options.plugins.legend.labels.padding, 20.0);

    let x = &options.scales.x;
    assert_eq!(x.kind, ScaleKind::Category);
    assert_eq!(x.title.text, "Month");
    assert!(x.ticks.auto_skip);
    assert_eq!(x.ticks.max_ticks_limit, 10);
    assert_eq!(x.ticks.max_rotation, 45.0);
    assert_eq!(x.ticks.min_rotation, 0.0);

    let y = &options.scales.y;
    assert_eq!(y.kind, ScaleKind::Linear);
    assert_eq!(y.title.text, "Amount (SGD)");
    assert!(!y.begin_at_zero);
    assert_eq!(y.ticks.callback, ValueTickFormat::CurrencyAbbreviated);
    assert_eq!(x.ticks.callback, CategoryTickFormat::MonthYear);
    assert_eq!(options.plugins.tooltip.callbacks.title, TooltipTitleFormat::MonthYear);
    assert_eq!(
        options.plugins.tooltip.callbacks.label,
        TooltipLabelFormat::CurrencyAmount
    );
}

#[test]
fn tooltip_and_crosshair_styling_is_fixed() {
    let options = build_chart_options("", &AxisLabels::default(), "S$");

    let tooltip = &options.plugins.tooltip;
    assert_eq!(tooltip.background_color, "rgba(0, 0, 0, 0.8)");
    assert_eq!(tooltip.title_color, "#FFFFFF");
    assert_eq!(tooltip.body_color, "#F7FAFC");
    assert_eq!(tooltip.padding, 10.0);
    assert_eq!(tooltip.box_padding, 8.0);
    assert_eq!(tooltip.body_spacing, 7.0);
    assert_eq!(tooltip.title_font.size, 16.0);
    assert_eq!(tooltip.body_font.size, 14.0);
    assert_eq!(tooltip.footer_font.size, 10.0);
    assert_eq!(tooltip.animation.duration, 200);

    let crosshair = &options.plugins.crosshair;
    assert!(crosshair.enabled);
    assert_eq!(crosshair.line.color, "#3e95cd");
    assert_eq!(crosshair.line.width, 1.0);
    assert_eq!(crosshair.line.dash_pattern, vec![5.0, 5.0]);
    assert!(!crosshair.sync.enabled);
    assert!(!crosshair.zoom.enabled);
}

#[test]
fn building_options_is_pure() {
    let labels = AxisLabels::new("x", "y");
    let first = build_chart_options("title", &labels, "USD");
    let second = build_chart_options("title", &labels, "USD");
    assert_eq!(first, second);
    assert_ne!(first, build_chart_options("other", &labels, "USD"));
}

#[test]
fn value_ticks_use_currency_symbol_and_abbreviation() {
    let options = build_chart_options("", &AxisLabels::default(), "S$");
    let ticks = &options.scales.y.ticks;
    assert_eq!(ticks.format_tick(2_000.0), "S$ 2K");
    assert_eq!(ticks.format_tick(150_000.0), "S$ 150K");
    assert_eq!(ticks.format_tick(2_500_000.0), "S$ 2.50M");
    assert_eq!(ticks.format_tick(500.0), "S$ 500");

    let usd = build_chart_options("", &AxisLabels::default(), "USD");
    assert_eq!(usd.scales.y.ticks.format_tick(1_500.0), "USD 1.5K");
}

#[test]
fn category_ticks_format_months_and_auto_skip() {
    let options = build_chart_options("", &AxisLabels::default(), "S$");
    let ticks = &options.scales.x.ticks;
    assert_eq!(ticks.format_tick("2024-01"), "Jan 2024");
    assert_eq!(ticks.format_tick("Q1"), "Q1");

    assert_eq!(ticks.visible_indices(4), vec![0, 1, 2, 3]);
    let visible = ticks.visible_indices(120);
    assert!(visible.len() <= 10);
    assert_eq!(visible.first(), Some(&0));
    assert!(visible.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn tooltip_callbacks_format_title_and_lines() {
    let options = build_chart_options("", &AxisLabels::default(), "S$");
    let tooltip = &options.plugins.tooltip;
    let items = vec![
        TooltipItem {
            label: "2024-03".to_owned(),
            dataset_label: "Medium Outcome".to_owned(),
            dataset_index: 2,
            data_index: 0,
            raw: Some(1_234.56),
        },
        TooltipItem {
            label: "2024-03".to_owned(),
            dataset_label: "2.5% p.a.".to_owned(),
            dataset_index: 4,
            data_index: 0,
            raw: None,
        },
    ];

    assert_eq!(tooltip.title(&items), "Mar 2024");
    assert_eq!(tooltip.title(&[]), "");
    assert_eq!(tooltip.label(&items[0]), "Medium Outcome: S$ 1.2K");
    assert_eq!(tooltip.label(&items[1]), "2.5% p.a.: S$ ");
}

#[test]
fn options_serialize_with_line_chart_keys() {
    let options = build_chart_options("t", &AxisLabels::default(), "S$");
    let value = serde_json::to_value(&options).expect("serialize options");

    assert_eq!(value["maintainAspectRatio"], false);
    assert_eq!(value["interaction"]["mode"], "index");
    assert_eq!(value["scales"]["x"]["type"], "category");
    assert_eq!(value["scales"]["y"]["type"], "linear");
    assert_eq!(value["scales"]["y"]["beginAtZero"], false);
    assert_eq!(value["scales"]["x"]["ticks"]["maxTicksLimit"], 10);
    assert_eq!(value["plugins"]["legend"]["labels"]["usePointStyle"], true);
    assert_eq!(value["plugins"]["crosshair"]["line"]["dashPattern"][0], 5.0);
}

#[test]
fn formatter_descriptors_serialize_by_slot() {
    let options = build_chart_options("t", &AxisLabels::default(), "S$");
    let value = serde_json::to_value(&options).expect("serialize options");

    assert_eq!(value["scales"]["x"]["ticks"]["callback"], "monthYear");
    assert_eq!(value["scales"]["y"]["ticks"]["callback"], "currencyAbbreviated");
    assert_eq!(value["plugins"]["tooltip"]["callbacks"]["title"], "monthYear");
    assert_eq!(value["plugins"]["tooltip"]["callbacks"]["label"], "currencyAmount");
}

#[test]
fn descriptors_outside_their_slot_are_rejected() {
    let options = build_chart_options("t", &AxisLabels::default(), "S$");
    let valid = serde_json::to_value(&options).expect("serialize options");
    let parsed: ChartOptions = serde_json::from_value(valid.clone()).expect("round trip");
    assert_eq!(parsed, options);

    let mut tooltip_label = valid.clone();
    tooltip_label["plugins"]["tooltip"]["callbacks"]["label"] = "monthYear".into();
    assert!(serde_json::from_value::<ChartOptions>(tooltip_label).is_err());

    let mut value_tick = valid.clone();
    value_tick["scales"]["y"]["ticks"]["callback"] = "monthYear".into();
    assert!(serde_json::from_value::<ChartOptions>(value_tick).is_err());

    let mut category_tick = valid;
    category_tick["scales"]["x"]["ticks"]["callback"] = "currencyAbbreviated".into();
    assert!(serde_json::from_value::<ChartOptions>(category_tick).is_err());
}

#[test]
fn unsupported_layout_modes_are_rejected() {
    let valid = serde_json::to_value(build_chart_options("t", &AxisLabels::default(), "S$"))
        .expect("serialize options");

    for (pointer, unsupported) in [
        ("/plugins/legend/position", "bottom"),
        ("/interaction/mode", "nearest"),
        ("/plugins/crosshair/sync/mode", "xy"),
    ] {
        let mut value = valid.clone();
        *value.pointer_mut(pointer).expect("field present") = unsupported.into();
        assert!(
            serde_json::from_value::<ChartOptions>(value).is_err(),
            "{pointer} = {unsupported} must not parse"
        );
    }
}
