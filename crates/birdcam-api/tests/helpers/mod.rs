//! Shared fixtures for API integration tests: an in-memory `StorageClient` and a
//! `TestServer` wired to it.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use birdcam_core::{Config, ObjectMetadata};
use birdcam_storage::{FetchedObject, StorageClient, StorageError, StorageResult};
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Upstream chunk size used by the fake store
pub const FAKE_CHUNK_SIZE: usize = 4096;

struct FakeObject {
    content_type: String,
    data: Vec<u8>,
}

/// In-memory object store with call counters.
#[derive(Default)]
pub struct FakeStorage {
    listings: HashMap<String, Vec<ObjectMetadata>>,
    objects: HashMap<(String, String), FakeObject>,
    unreachable: bool,
    pub list_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
}

impl FakeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(self, bucket: &str, names: &[&str]) -> Self {
        let items = names.iter().map(|n| ObjectMetadata::new(*n)).collect();
        self.with_items(bucket, items)
    }

    pub fn with_items(mut self, bucket: &str, items: Vec<ObjectMetadata>) -> Self {
        self.listings.insert(bucket.to_string(), items);
        self
    }

    pub fn with_object(mut self, bucket: &str, name: &str, content_type: &str, data: Vec<u8>) -> Self {
        self.objects.insert(
            (bucket.to_string(), name.to_string()),
            FakeObject {
                content_type: content_type.to_string(),
                data,
            },
        );
        self
    }

    /// Every call fails as if the store could not be reached.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn listings(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorageClient for FakeStorage {
    async fn list_objects(&self, bucket: &str) -> StorageResult<Vec<ObjectMetadata>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(StorageError::RequestFailed("connection refused".to_string()));
        }
        Ok(self.listings.get(bucket).cloned().unwrap_or_default())
    }

    async fn fetch_object(&self, bucket: &str, name: &str) -> StorageResult<FetchedObject> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(StorageError::RequestFailed("connection refused".to_string()));
        }

        match self.objects.get(&(bucket.to_string(), name.to_string())) {
            Some(object) => {
                let chunks: Vec<Result<Bytes, StorageError>> = object
                    .data
                    .chunks(FAKE_CHUNK_SIZE)
                    .map(|c| Ok(Bytes::copy_from_slice(c)))
                    .collect();
                Ok(FetchedObject {
                    status: 200,
                    content_type: Some(object.content_type.clone()),
                    content_length: Some(object.data.len() as u64),
                    body: Box::pin(futures::stream::iter(chunks)),
                })
            }
            None => Ok(FetchedObject {
                status: 404,
                content_type: Some("application/xml".to_string()),
                content_length: None,
                body: Box::pin(futures::stream::empty::<Result<Bytes, StorageError>>()),
            }),
        }
    }
}

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<FakeStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup a test application over a fake store with the default configuration
pub fn setup_test_app(storage: FakeStorage) -> TestApp {
    setup_test_app_with_config(Config::default(), storage)
}

pub fn setup_test_app_with_config(config: Config, storage: FakeStorage) -> TestApp {
    let storage = Arc::new(storage);
    let router = birdcam_api::setup::build_router(config, storage.clone())
        .expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");
    TestApp { server, storage }
}

/// Deterministic payload of `len` bytes
pub fn video_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
