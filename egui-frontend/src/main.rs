use anyhow::Context;
use eframe::egui;
use log::{error, info};

mod app;
mod config;
mod services;
mod ui;

use config::DashboardConfig;
use ui::DashboardApp;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting wallet dashboard");

    let config = DashboardConfig::load().context("Failed to load dashboard config")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Wallet Dashboard")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Wallet Dashboard",
        options,
        Box::new(move |cc| match DashboardApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized wallet dashboard");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {}", e))
}
