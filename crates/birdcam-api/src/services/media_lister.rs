//! Media listing: bucket listing → filtered, URL-rewritten `MediaFile`s.

use crate::constants::VIDEO_PROXY_PREFIX;
use crate::error::storage_error;
use birdcam_core::{AppError, Config, MediaFile, MediaType, ObjectMetadata};
use birdcam_storage::StorageClient;

/// Whether a listed object should be exposed: not hidden, and carrying an allowed extension.
pub fn is_listable(name: &str, config: &Config) -> bool {
    !name.starts_with('.') && config.has_allowed_extension(name)
}

/// Client-facing URL of an object.
///
/// Videos always go through the proxy so they pick up its headers; images are
/// served straight from the bucket. The name is encoded as a single path segment.
pub fn media_url(media_type: MediaType, name: &str, config: &Config) -> String {
    let segment = urlencoding::encode(name);
    match media_type {
        MediaType::Videos => format!("{}/{}", VIDEO_PROXY_PREFIX, segment),
        MediaType::Images => config.storage.public_url(
            &urlencoding::encode(config.buckets.bucket_for(media_type)),
            &segment,
        ),
    }
}

/// Filter a raw listing and map it to `MediaFile`s, keeping upstream order.
pub fn build_media_files(
    media_type: MediaType,
    items: Vec<ObjectMetadata>,
    config: &Config,
) -> Vec<MediaFile> {
    items
        .into_iter()
        .filter(|item| is_listable(&item.name, config))
        .map(|item| MediaFile {
            url: media_url(media_type, &item.name, config),
            name: item.name,
            size: item.size,
            updated: item.updated,
        })
        .collect()
}

/// List the media of one type.
///
/// `media_type` is the raw path segment; anything but `images`/`videos` is rejected
/// before the store is contacted.
pub async fn list_media(
    storage: &dyn StorageClient,
    config: &Config,
    media_type: &str,
) -> Result<Vec<MediaFile>, AppError> {
    let media_type: MediaType = media_type.parse()?;
    let bucket = config.buckets.bucket_for(media_type);

    tracing::info!(media_type = %media_type, bucket = %bucket, "Fetching bucket listing");

    let items = storage
        .list_objects(bucket)
        .await
        .map_err(|e| storage_error("Failed to fetch media", e))?;

    let listed = items.len();
    let files = build_media_files(media_type, items, config);

    tracing::info!(
        media_type = %media_type,
        listed,
        returned = files.len(),
        "Returning media files"
    );

    Ok(files)
}
