//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use birdcam_core::Config;
use birdcam_storage::StorageClient;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.log_format)
        .context("Failed to initialize telemetry")?;

    tracing::info!(
        images_bucket = %config.buckets.images,
        videos_bucket = %config.buckets.videos,
        environment = %config.environment,
        "Configuration loaded and validated successfully"
    );

    let storage = storage::setup_storage(&config)?;

    let state = Arc::new(AppState::new(config, storage));
    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}

/// Build the router around an existing storage client (no telemetry, no network setup).
pub fn build_router(config: Config, storage: Arc<dyn StorageClient>) -> Result<axum::Router> {
    config.validate().context("Configuration validation failed")?;
    routes::setup_routes(Arc::new(AppState::new(config, storage)))
}
