//! Storage abstraction trait
//!
//! This module defines the StorageClient trait that the API talks to.

use async_trait::async_trait;
use birdcam_core::ObjectMetadata;
use bytes::Bytes;
use futures::Stream;
use std::fmt;
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Stream interrupted: {0}")]
    StreamFailed(String),

    #[error("Invalid object name: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Lazy, single-pass object body. Dropping it releases the upstream connection.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Response of an object fetch: upstream status and headers plus the unread body.
pub struct FetchedObject {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

impl fmt::Debug for FetchedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedObject")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Storage abstraction trait
///
/// The API only ever reads: it lists a bucket and streams single objects.
/// Implementations must not retry; failures are surfaced to the caller as-is.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// List all objects of a bucket, in the order the store returns them.
    ///
    /// A listing without an `items` field is an empty bucket, not an error.
    async fn list_objects(&self, bucket: &str) -> StorageResult<Vec<ObjectMetadata>>;

    /// Start fetching an object.
    ///
    /// Returns as soon as response headers are available; the body is not read.
    /// A non-200 status is reported through `FetchedObject::status`, not as an error.
    async fn fetch_object(&self, bucket: &str, name: &str) -> StorageResult<FetchedObject>;
}
