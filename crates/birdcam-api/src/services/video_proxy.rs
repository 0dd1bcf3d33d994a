//! Video proxy: relays an object from the videos bucket chunk by chunk.
//!
//! The upstream body is never collected. Each chunk is handed to the client
//! before the next one is polled, and dropping the response (client gone)
//! drops the upstream connection with it.

use crate::constants::{
    DEFAULT_CONTENT_TYPE, VIDEO_ALLOW_HEADERS, VIDEO_ALLOW_METHODS,
};
use crate::error::storage_error;
use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use birdcam_core::{AppError, Config};
use birdcam_storage::{validate_object_name, StorageClient};
use futures::StreamExt;

/// Value for `Access-Control-Allow-Origin` on proxied responses.
pub fn allow_origin(config: &Config) -> HeaderValue {
    if config.allows_any_origin() {
        return HeaderValue::from_static("*");
    }
    config
        .cors_origins
        .first()
        .and_then(|origin| HeaderValue::from_str(origin).ok())
        .unwrap_or_else(|| HeaderValue::from_static("*"))
}

/// `inline` disposition carrying the filename.
///
/// Non-ASCII names get an RFC 5987 `filename*` parameter next to an ASCII fallback.
pub fn content_disposition(filename: &str) -> HeaderValue {
    let escaped: String = filename
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
        .flat_map(|c| match c {
            '"' | '\\' => vec!['\\', c],
            _ => vec![c],
        })
        .collect();

    let value = if filename.is_ascii() {
        format!("inline; filename=\"{}\"", escaped)
    } else {
        format!(
            "inline; filename=\"{}\"; filename*=UTF-8''{}",
            escaped,
            urlencoding::encode(filename)
        )
    };

    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("inline"))
}

/// Proxy one video from the configured videos bucket.
pub async fn proxy_video(
    storage: &dyn StorageClient,
    config: &Config,
    filename: &str,
) -> Result<Response, AppError> {
    validate_object_name(filename).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let bucket = &config.buckets.videos;
    tracing::info!(filename = %filename, bucket = %bucket, "Proxying video");

    let object = storage
        .fetch_object(bucket, filename)
        .await
        .map_err(|e| storage_error("Failed to fetch video", e))?;

    if object.status != 200 {
        tracing::warn!(
            filename = %filename,
            upstream_status = object.status,
            "Upstream did not return the video"
        );
        return Err(AppError::NotFound("Video not found".to_string()));
    }

    let content_type = object
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    let name = filename.to_string();
    let body_stream = object.body.map(move |result| {
        result.map_err(|e| {
            tracing::error!(error = %e, filename = %name, "Video stream interrupted");
            std::io::Error::other(format!("Storage stream error: {}", e))
        })
    });

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin(config))
        .header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(VIDEO_ALLOW_METHODS),
        )
        .header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(VIDEO_ALLOW_HEADERS),
        )
        .header(header::CONTENT_DISPOSITION, content_disposition(filename));

    if let Some(len) = object.content_length {
        builder = builder.header(header::CONTENT_LENGTH, len);
    }

    builder.body(Body::from_stream(body_stream)).map_err(|e| {
        tracing::error!(error = %e, "Failed to build video response");
        AppError::Internal(format!("Failed to build video response: {}", e))
    })
}
