#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use zip_to_udf::app::{self, ZipToUdfApp};
use zip_to_udf::config::Settings;
use zip_to_udf::logging;

fn main() -> Result<()> {
    logging::init();

    let settings = Settings::default();
    let app = ZipToUdfApp::new().context("failed to start the copy runtime")?;
    let native_options = eframe::NativeOptions {
        viewport: app::viewport(&settings),
        centered: true,
        ..Default::default()
    };
    log::info!("starting {}", settings.title);
    eframe::run_native(
        &settings.title,
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the application: {e}"))
}
