//! Birdcam API Library
//!
//! This crate provides the HTTP handlers, services, middleware, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod middleware;
mod services;
mod telemetry;

// Public modules
pub mod constants;
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::media_lister::{build_media_files, list_media};
pub use services::video_proxy::proxy_video;
pub use state::AppState;
