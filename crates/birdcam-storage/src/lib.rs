//! Birdcam Storage Library
//!
//! This crate provides the object-storage client used by the API: the
//! `StorageClient` trait and its Google Cloud Storage implementation.
//!
//! # Object names
//!
//! Object names are returned from listings as stored. Before one becomes part of a
//! fetch URL it is validated (see [`validate_object_name`]) and percent-encoded.

pub mod gcs;
pub mod keys;
pub mod traits;

// Re-export commonly used types
pub use gcs::GcsStorage;
pub use keys::validate_object_name;
pub use traits::{ByteStream, FetchedObject, StorageClient, StorageError, StorageResult};
