use gtk4 as gtk;
use gtk::prelude::*;
use projection_chart::platform_gtk::GtkLineChart;
use projection_chart::{ProjectionChart, register_chart_plugins, telemetry};
use tracing::error;

fn main() -> gtk::glib::ExitCode {
    let _ = telemetry::init_default_tracing();
    register_chart_plugins();

    let app = gtk::Application::builder()
        .application_id("io.github.projection_chart.Viewer")
        .build();
    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &gtk::Application) {
    let projection = match ProjectionChart::bundled() {
        Ok(projection) => projection,
        Err(err) => {
            error!(error = %err, "failed to load bundled projection data");
            return;
        }
    };
    let chart = match GtkLineChart::new(
        projection.chart_data(),
        projection.chart_options(),
        projection.config().layout,
    ) {
        Ok(chart) => chart,
        Err(err) => {
            error!(error = %err, "failed to create chart widget");
            return;
        }
    };

    let heading = gtk::Label::new(Some("Investment Plan Projection"));
    heading.add_css_class("title-1");

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(16);
    root.set_margin_bottom(16);
    root.set_margin_start(16);
    root.set_margin_end(16);
    root.append(&heading);
    root.append(chart.widget());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Investment Plan Projection")
        .default_width(1100)
        .default_height(680)
        .child(&root)
        .build();
    window.present();
}
