use crate::error::{ErrorResponse, HttpAppError, ValidatedPath};
use crate::state::AppState;
use axum::{extract::State, response::Response};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/video/{filename}",
    tag = "videos",
    params(
        ("filename" = String, Path, description = "Object name in the videos bucket")
    ),
    responses(
        (status = 200, description = "Video bytes, streamed from the bucket"),
        (status = 400, description = "Filename is not a single object name", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "proxy_video"))]
pub async fn proxy_video(
    State(state): State<Arc<AppState>>,
    ValidatedPath(filename): ValidatedPath<String>,
) -> Result<Response, HttpAppError> {
    let response =
        crate::services::video_proxy::proxy_video(state.storage.as_ref(), &state.config, &filename)
            .await?;
    Ok(response)
}
