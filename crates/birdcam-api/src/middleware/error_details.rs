use crate::error::ErrorDetails;
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Error detail middleware
///
/// Rewrites error bodies to include `details` and `error_type` unless the configured
/// environment is production. Responses without an [`ErrorDetails`] extension pass through.
pub async fn error_details_middleware(
    State(state): State<Arc<AppState>>,
    mut response: Response,
) -> Response {
    let Some(ErrorDetails(detailed)) = response.extensions_mut().remove::<ErrorDetails>() else {
        return response;
    };
    if state.config.is_production() {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut rewritten = (parts.status, Json(detailed)).into_response();
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().append(name.clone(), value.clone());
        }
    }
    rewritten
}
