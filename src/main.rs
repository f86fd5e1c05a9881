mod app;
mod config;
mod data;
mod error;
mod model;
mod predict;
mod report;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use app::AqiPredictorApp;
use eframe::egui;
use model::ModelArtifact;
use predict::Predictor;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The model must load before the window opens; without it nothing can be served.
    let artifact = ModelArtifact::load(Path::new(config::MODEL_PATH))
        .with_context(|| format!("loading model artifact {}", config::MODEL_PATH))
        .inspect_err(|e| log::error!("{e:#}"))?;
    let predictor = Predictor::new(Arc::new(artifact));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(AqiPredictorApp::new(predictor)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
