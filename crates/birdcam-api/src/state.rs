//! Application state shared by all handlers.
//!
//! Built once at startup and never mutated: the configuration (bucket mapping,
//! URL bases, CORS origins) and the storage client used to reach the buckets.

use birdcam_core::Config;
use birdcam_storage::StorageClient;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn StorageClient>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn StorageClient>) -> Self {
        Self { config, storage }
    }
}
