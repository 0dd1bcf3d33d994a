//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use birdcam_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Birdcam API",
        version = "0.1.0",
        description = "Lists bird-cam images and videos from object storage and proxies video bytes with cross-origin headers."
    ),
    paths(
        handlers::media::list_media,
        handlers::video::proxy_video,
        handlers::health::health_check,
        handlers::health::api_test,
    ),
    components(schemas(
        models::MediaFile,
        models::MediaType,
        error::ErrorResponse,
        handlers::health::HealthResponse,
        handlers::health::TestResponse,
    )),
    tags(
        (name = "media", description = "Bucket listings"),
        (name = "videos", description = "Video proxy"),
        (name = "health", description = "Static health endpoints")
    )
)]
pub struct ApiDoc;
