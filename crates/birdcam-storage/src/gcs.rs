use crate::keys::validate_object_name;
use crate::traits::{FetchedObject, StorageClient, StorageError, StorageResult};
use async_trait::async_trait;
use birdcam_core::models::BucketListing;
use birdcam_core::{ObjectMetadata, StorageEndpoints};
use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;

/// Google Cloud Storage client over the public JSON listing API and public object URLs.
///
/// No credentials are sent: both buckets are expected to be publicly readable.
#[derive(Clone)]
pub struct GcsStorage {
    client: reqwest::Client,
    endpoints: StorageEndpoints,
}

impl GcsStorage {
    /// Create a new GcsStorage instance
    ///
    /// # Arguments
    /// * `endpoints` - Listing/public base URLs and upstream timeouts. Point both bases at a
    ///   local emulator (e.g. "http://localhost:4443/storage/v1") for development.
    pub fn new(endpoints: StorageEndpoints) -> StorageResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(endpoints.connect_timeout)
            .build()
            .map_err(|e| StorageError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(GcsStorage { client, endpoints })
    }

    fn object_url(&self, bucket: &str, name: &str) -> String {
        self.endpoints
            .public_url(&urlencoding::encode(bucket), &urlencoding::encode(name))
    }
}

fn request_error(err: reqwest::Error, url: &str) -> StorageError {
    if err.is_timeout() {
        StorageError::Timeout(format!("{}: {}", url, err))
    } else {
        StorageError::RequestFailed(format!("{}: {}", url, err))
    }
}

#[async_trait]
impl StorageClient for GcsStorage {
    async fn list_objects(&self, bucket: &str) -> StorageResult<Vec<ObjectMetadata>> {
        let url = self.endpoints.listing_url(&urlencoding::encode(bucket));
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(&url)
            .timeout(self.endpoints.request_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, bucket = %bucket, "GCS listing request failed");
                request_error(e, &url)
            })?;

        let status = response.status();
        if !status.is_success() {
            // The error document is still JSON; without `items` it reads as an empty bucket.
            tracing::warn!(
                bucket = %bucket,
                status = status.as_u16(),
                "GCS listing returned non-success status"
            );
        }

        let body = response.bytes().await.map_err(|e| request_error(e, &url))?;
        let listing: BucketListing = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, bucket = %bucket, "GCS listing body is not valid JSON");
            StorageError::InvalidResponse(format!("Listing for bucket {}: {}", bucket, e))
        })?;

        let items = listing.into_items();
        tracing::debug!(
            bucket = %bucket,
            status = status.as_u16(),
            item_count = items.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "GCS listing completed"
        );

        Ok(items)
    }

    async fn fetch_object(&self, bucket: &str, name: &str) -> StorageResult<FetchedObject> {
        validate_object_name(name)?;

        let url = self.object_url(bucket, name);
        let start = std::time::Instant::now();

        let response = tokio::time::timeout(
            self.endpoints.request_timeout,
            self.client.get(&url).send(),
        )
        .await
        .map_err(|_| {
            tracing::error!(bucket = %bucket, key = %name, "GCS object request timed out");
            StorageError::Timeout(format!("{}: no response headers", url))
        })?
        .map_err(|e| {
            tracing::error!(error = %e, bucket = %bucket, key = %name, "GCS object request failed");
            request_error(e, &url)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        let content_length = response.content_length();

        tracing::debug!(
            bucket = %bucket,
            key = %name,
            status,
            content_type = ?content_type,
            content_length = ?content_length,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "GCS object response headers received"
        );

        let bucket = bucket.to_string();
        let key = name.to_string();
        let body = response.bytes_stream().map(move |res| {
            res.map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "GCS object stream error"
                );
                StorageError::StreamFailed(e.to_string())
            })
        });

        Ok(FetchedObject {
            status,
            content_type,
            content_length,
            body: Box::pin(body),
        })
    }
}
