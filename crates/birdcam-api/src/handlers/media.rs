use crate::error::{ErrorResponse, HttpAppError, ValidatedPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use birdcam_core::MediaFile;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/media/{media_type}",
    tag = "media",
    params(
        ("media_type" = String, Path, description = "Media type: `images` or `videos`")
    ),
    responses(
        (status = 200, description = "Media files in bucket listing order", body = [MediaFile]),
        (status = 400, description = "Unknown media type", body = ErrorResponse),
        (status = 500, description = "Bucket listing failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_media"))]
pub async fn list_media(
    State(state): State<Arc<AppState>>,
    ValidatedPath(media_type): ValidatedPath<String>,
) -> Result<Json<Vec<MediaFile>>, HttpAppError> {
    let files =
        crate::services::media_lister::list_media(state.storage.as_ref(), &state.config, &media_type)
            .await?;
    Ok(Json(files))
}
