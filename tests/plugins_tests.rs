use projection_chart::extensions::{
    ChartComponent, active_registry, is_registered, register_chart_plugins,
    registered_components,
};

// Registration is process-wide, so this file keeps a single test.
#[test]
fn registration_happens_once() {
    assert!(active_registry().is_none());
    assert!(registered_components().is_empty());
    assert!(!is_registered(ChartComponent::LineElement));

    assert!(register_chart_plugins());
    assert!(!register_chart_plugins());
    assert!(!register_chart_plugins());

    let registry = active_registry().expect("registry after registration");
    assert!(registry.supports_line_chart());
    assert_eq!(registry.plugin_count(), 1);
    assert!(registry.has_plugin("crosshair"));
    assert_eq!(registered_components(), ChartComponent::LINE_CHART.as_slice());
    for component in ChartComponent::LINE_CHART {
        assert!(is_registered(component));
    }
}
