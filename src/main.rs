//! Diabetes Dashboard - CSV exploration & interactive charts
//!
//! Loads a diabetes health indicators CSV once, cleans it, and renders
//! descriptive statistics, charts and a correlation heatmap.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;
use gui::DashboardApp;
use std::path::Path;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::load(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
        log::error!("{}; using default configuration", e);
        DashboardConfig::default()
    });

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Diabetes Data Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Diabetes Data Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
}
