//! Omok GUI
//!
//! A graphical hot-seat board for two players.

use clap::Parser;
use omok::config::ViewerConfig;
use omok::ui::OmokApp;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let config = ViewerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    if let Err(msg) = config.validate() {
        error!("{msg}");
        std::process::exit(2);
    }

    info!(size = config.size, "starting Omok viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([600.0, 450.0])
            .with_title("Omok"),
        ..Default::default()
    };

    let size = config.size;
    eframe::run_native(
        "Omok",
        options,
        Box::new(move |cc| Ok(Box::new(OmokApp::new(cc, size)))),
    )
}
