//! Static health endpoints. Neither touches the object store.

use crate::error::HttpAppError;
use axum::{http::Uri, Json};
use birdcam_core::AppError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TestResponse {
    #[schema(example = "API is working")]
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/test",
    tag = "health",
    responses((status = 200, description = "API is reachable", body = TestResponse))
)]
pub async fn api_test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "API is working".to_string(),
    })
}

/// Fallback for unknown routes, rendered like every other API error.
pub async fn not_found(uri: Uri) -> HttpAppError {
    HttpAppError(AppError::NotFound(format!("No route for {}", uri.path())))
}

