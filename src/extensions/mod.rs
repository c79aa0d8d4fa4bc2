//! Render-pass extensions: the component registry and overlay plugins.

pub mod plugins;

pub use plugins::{
    ChartComponent, ChartPlugin, CrosshairPlugin, PluginContext, PluginRegistry,
    RequireCrosshairState, active_registry, is_registered, register_chart_plugins,
    registered_components,
};
