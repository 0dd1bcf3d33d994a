//! Storage setup and initialization

use anyhow::Result;
use birdcam_core::Config;
use birdcam_storage::{GcsStorage, StorageClient};
use std::sync::Arc;

pub fn setup_storage(config: &Config) -> Result<Arc<dyn StorageClient>> {
    let storage = GcsStorage::new(config.storage.clone())?;
    tracing::info!(
        api_base_url = %config.storage.api_base_url,
        public_base_url = %config.storage.public_base_url,
        connect_timeout_secs = config.storage.connect_timeout.as_secs(),
        request_timeout_secs = config.storage.request_timeout.as_secs(),
        "Storage client initialized"
    );
    Ok(Arc::new(storage))
}
