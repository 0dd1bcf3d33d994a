//! API constants
//!
//! All routes live under `/api`; the video proxy prefix is also what media
//! listings emit as the url of every video.

/// API base path prefix
pub const API_BASE: &str = "/api";

/// Same-origin prefix under which videos are proxied
pub const VIDEO_PROXY_PREFIX: &str = "/api/video";

/// Path of the served OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";

/// Methods advertised on proxied video responses
pub const VIDEO_ALLOW_METHODS: &str = "GET, OPTIONS";

/// Request headers advertised on proxied video responses
pub const VIDEO_ALLOW_HEADERS: &str = "Content-Type";

/// Fallback when the store does not report a content type
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
