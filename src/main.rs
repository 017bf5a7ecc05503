use anyhow::{anyhow, Result};
use eframe::egui;
use sip_calculator::{app, logging};
use tracing::info;

fn main() -> Result<()> {
    logging::init_logging();

    let cfg = app::config::Config::load();
    let title = cfg.title.clone();
    info!(%title, destinations = cfg.destinations.len(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([420.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(app::App::with_config(cfg)))),
    )
    .map_err(|e| anyhow!("failed to open window: {e}"))
}
