//! AccessPanel - Accessibility Preference Engine
//!
//! Main entry point for the demo host application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AccessPanel v{}", env!("CARGO_PKG_VERSION"));

    // AccessKit is enabled by default in eframe 0.33+, so screen readers
    // reach the UI through platform accessibility APIs
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("AccessPanel"),
        ..Default::default()
    };

    eframe::run_native(
        "AccessPanel",
        options,
        Box::new(|cc| Ok(Box::new(app::AccessPanelApp::new(cc)))),
    )
}
