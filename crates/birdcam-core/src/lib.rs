//! Birdcam Core Library
//!
//! This crate provides the domain models, error types, and configuration
//! shared by the storage client and the HTTP API.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BucketConfig, Config, LogFormat, StorageEndpoints};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{MediaFile, MediaType, ObjectMetadata};
