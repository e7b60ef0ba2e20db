mod app;
mod config;
mod error;
mod selection;
mod upload;
mod utils;

use app::BatchValidator;
use config::AppConfig;
use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utils::labels;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "batch_validator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load();
    info!(base_url = %config.api.base_url, "Starting {}", labels::APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        labels::APP_TITLE,
        options,
        Box::new(move |cc| Box::new(BatchValidator::new(cc, config))),
    )
}
