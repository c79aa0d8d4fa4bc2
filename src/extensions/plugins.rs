use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::api::{ChartData, ChartOptions};
use crate::core::PlotArea;
use crate::error::{ChartError, ChartResult};
use crate::interaction::CrosshairState;
use crate::render::{Color, LinePrimitive, LineStrokeStyle, RenderFrame};

static ACTIVE_REGISTRY: OnceLock<PluginRegistry> = OnceLock::new();

/// Building blocks a line-chart render pass depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartComponent {
    CategoryScale,
    LinearScale,
    PointElement,
    LineElement,
    Title,
    Tooltip,
    Legend,
    Crosshair,
}

impl ChartComponent {
    pub const LINE_CHART: [Self; 8] = [
        Self::CategoryScale,
        Self::LinearScale,
        Self::PointElement,
        Self::LineElement,
        Self::Title,
        Self::Tooltip,
        Self::Legend,
        Self::Crosshair,
    ];
}

/// Read-only state passed to plugin draw hooks.
#[derive(Debug, Clone, Copy)]
pub struct PluginContext<'a> {
    pub plot_area: PlotArea,
    pub data: &'a ChartData,
    pub options: &'a ChartOptions,
    /// Present only while a category is hovered.
    pub crosshair: Option<CrosshairState>,
}

/// Overlay hook run after the chart body is laid out.
///
/// Plugins append primitives to the frame; they cannot change data or options.
pub trait ChartPlugin: Send + Sync {
    fn id(&self) -> &str;
    fn after_draw(&self, context: &PluginContext<'_>, frame: &mut RenderFrame) -> ChartResult<()>;
}

/// Vertical guide line at the hovered category.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosshairPlugin;

impl ChartPlugin for CrosshairPlugin {
    fn id(&self) -> &str {
        "crosshair"
    }

    fn after_draw(&self, context: &PluginContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let options = &context.options.plugins.crosshair;
        if !options.enabled {
            return Ok(());
        }
        let crosshair = context.crosshair.ok_or_else(|| {
            ChartError::InvalidData("crosshair plugin drawn without crosshair state".to_owned())
        })?;

        let plot = context.plot_area;
        let line = LinePrimitive::new(
            crosshair.x,
            plot.top,
            crosshair.x,
            plot.bottom(),
            options.line.width,
            Color::from_css(&options.line.color)?,
        )
        .with_stroke_style(LineStrokeStyle::from_pattern(&options.line.dash_pattern));
        frame.push_line(line);
        Ok(())
    }
}

/// Runs the wrapped plugin only when the chart carries crosshair state.
///
/// Charts that were never hovered skip the inner draw hook entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireCrosshairState<P> {
    inner: P,
}

impl<P: ChartPlugin> RequireCrosshairState<P> {
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: ChartPlugin> ChartPlugin for RequireCrosshairState<P> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn after_draw(&self, context: &PluginContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        if context.crosshair.is_none() {
            trace!(plugin = self.inner.id(), "no crosshair state; skipping draw");
            return Ok(());
        }
        self.inner.after_draw(context, frame)
    }
}

/// Components and overlay plugins available to render passes.
#[derive(Default)]
pub struct PluginRegistry {
    components: Vec<ChartComponent>,
    plugins: Vec<Box<dyn ChartPlugin>>,
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("components", &self.components)
            .field(
                "plugins",
                &self.plugins.iter().map(|p| p.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every line-chart component and the guarded crosshair.
    #[must_use]
    pub fn line_chart() -> Self {
        let mut registry = Self::new();
        for component in ChartComponent::LINE_CHART {
            registry.register_component(component);
        }
        registry.plugins.push(Box::new(RequireCrosshairState::new(CrosshairPlugin)));
        registry
    }

    /// Adds a component. Returns `false` when it was already present.
    pub fn register_component(&mut self, component: ChartComponent) -> bool {
        if self.components.contains(&component) {
            return false;
        }
        self.components.push(component);
        true
    }

    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    #[must_use]
    pub fn components(&self) -> &[ChartComponent] {
        &self.components
    }

    #[must_use]
    pub fn has_component(&self, component: ChartComponent) -> bool {
        self.components.contains(&component)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// `true` when every line-chart component is registered.
    #[must_use]
    pub fn supports_line_chart(&self) -> bool {
        ChartComponent::LINE_CHART
            .iter()
            .all(|component| self.has_component(*component))
    }

    /// Runs every plugin's draw hook in registration order.
    pub fn run_after_draw(
        &self,
        context: &PluginContext<'_>,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        for plugin in &self.plugins {
            plugin.after_draw(context, frame)?;
        }
        Ok(())
    }
}

/// Installs the line-chart components and crosshair overlay process-wide.
///
/// Call once at startup before the first render. Later calls are no-ops;
/// returns `true` only for the call that performed the registration.
pub fn register_chart_plugins() -> bool {
    let mut registered_now = false;
    ACTIVE_REGISTRY.get_or_init(|| {
        registered_now = true;
        PluginRegistry::line_chart()
    });
    if registered_now {
        debug!(
            components = ChartComponent::LINE_CHART.len(),
            "registered chart plugins"
        );
    } else {
        trace!("chart plugins already registered");
    }
    registered_now
}

/// The process-wide registry, once `register_chart_plugins` has run.
#[must_use]
pub fn active_registry() -> Option<&'static PluginRegistry> {
    ACTIVE_REGISTRY.get()
}

#[must_use]
pub fn is_registered(component: ChartComponent) -> bool {
    active_registry().is_some_and(|registry| registry.has_component(component))
}

#[must_use]
pub fn registered_components() -> &'static [ChartComponent] {
    match active_registry() {
        Some(registry) => registry.components(),
        None => &[],
    }
}
