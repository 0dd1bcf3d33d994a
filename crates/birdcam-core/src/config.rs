//! Configuration module
//!
//! Configuration is read once at startup (environment plus an optional `.env`
//! file), validated, and then shared read-only with every handler.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration;

use crate::models::MediaType;

const SERVER_PORT: u16 = 5050;
const BIND_ADDRESS: &str = "0.0.0.0";
const IMAGES_BUCKET: &str = "bird_cam_images";
const VIDEOS_BUCKET: &str = "bird_cam_videos";
const STORAGE_API_BASE_URL: &str = "https://storage.googleapis.com/storage/v1";
const STORAGE_PUBLIC_BASE_URL: &str = "https://storage.googleapis.com";
const MEDIA_ALLOWED_EXTENSIONS: &str = "jpg,jpeg,png,mp4";
const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;
const UPSTREAM_TIMEOUT_SECS: u64 = 30;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;

/// Bucket assigned to each media type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketConfig {
    pub images: String,
    pub videos: String,
}

impl BucketConfig {
    pub fn bucket_for(&self, media_type: MediaType) -> &str {
        match media_type {
            MediaType::Images => &self.images,
            MediaType::Videos => &self.videos,
        }
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            images: IMAGES_BUCKET.to_string(),
            videos: VIDEOS_BUCKET.to_string(),
        }
    }
}

/// Where the object store lives and how long we wait for it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageEndpoints {
    /// JSON API base, e.g. `https://storage.googleapis.com/storage/v1`
    pub api_base_url: String,
    /// Public object base, e.g. `https://storage.googleapis.com`
    pub public_base_url: String,
    pub connect_timeout: Duration,
    /// Total timeout for listings; time-to-headers for object fetches
    pub request_timeout: Duration,
}

impl StorageEndpoints {
    /// Listing endpoint for a bucket.
    pub fn listing_url(&self, bucket: &str) -> String {
        format!("{}/b/{}/o", self.api_base_url, bucket)
    }

    /// Direct public URL of an object. Both segments must already be percent-encoded.
    pub fn public_url(&self, bucket: &str, name: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, bucket, name)
    }
}

impl Default for StorageEndpoints {
    fn default() -> Self {
        Self {
            api_base_url: STORAGE_API_BASE_URL.to_string(),
            public_base_url: STORAGE_PUBLIC_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(UPSTREAM_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
        }
    }
}

/// Console log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub bind_address: String,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub http_concurrency_limit: usize,
    pub log_format: LogFormat,
    pub buckets: BucketConfig,
    pub storage: StorageEndpoints,
    /// Lower-case extensions without the leading dot
    pub allowed_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: SERVER_PORT,
            bind_address: BIND_ADDRESS.to_string(),
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            http_concurrency_limit: HTTP_CONCURRENCY_LIMIT,
            log_format: LogFormat::Compact,
            buckets: BucketConfig::default(),
            storage: StorageEndpoints::default(),
            allowed_extensions: split_list(MEDIA_ALLOWED_EXTENSIONS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = split_list(&var("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()));

        let allowed_extensions = split_list(
            &var("MEDIA_ALLOWED_EXTENSIONS").unwrap_or_else(|| MEDIA_ALLOWED_EXTENSIONS.to_string()),
        )
        .into_iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .collect();

        let config = Config {
            server_port: var("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| BIND_ADDRESS.to_string()),
            environment,
            cors_origins,
            http_concurrency_limit: var("HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
            log_format: match var("LOG_FORMAT") {
                Some(s) => s.parse()?,
                None => LogFormat::default(),
            },
            buckets: BucketConfig {
                images: var("IMAGES_BUCKET").unwrap_or_else(|| IMAGES_BUCKET.to_string()),
                videos: var("VIDEOS_BUCKET").unwrap_or_else(|| VIDEOS_BUCKET.to_string()),
            },
            storage: StorageEndpoints {
                api_base_url: trim_base_url(
                    var("STORAGE_API_BASE_URL")
                        .unwrap_or_else(|| STORAGE_API_BASE_URL.to_string()),
                ),
                public_base_url: trim_base_url(
                    var("STORAGE_PUBLIC_BASE_URL")
                        .unwrap_or_else(|| STORAGE_PUBLIC_BASE_URL.to_string()),
                ),
                connect_timeout: Duration::from_secs(parse_secs(
                    var("UPSTREAM_CONNECT_TIMEOUT_SECS"),
                    "UPSTREAM_CONNECT_TIMEOUT_SECS",
                    UPSTREAM_CONNECT_TIMEOUT_SECS,
                )?),
                request_timeout: Duration::from_secs(parse_secs(
                    var("UPSTREAM_TIMEOUT_SECS"),
                    "UPSTREAM_TIMEOUT_SECS",
                    UPSTREAM_TIMEOUT_SECS,
                )?),
            },
            allowed_extensions,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.buckets.images.trim().is_empty() || self.buckets.videos.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "IMAGES_BUCKET and VIDEOS_BUCKET must not be empty"
            ));
        }

        for (name, url) in [
            ("STORAGE_API_BASE_URL", &self.storage.api_base_url),
            ("STORAGE_PUBLIC_BASE_URL", &self.storage.public_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "{} must be an http:// or https:// URL, got '{}'",
                    name,
                    url
                ));
            }
        }

        if self.allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "MEDIA_ALLOWED_EXTENSIONS must list at least one extension"
            ));
        }

        if self.storage.connect_timeout.is_zero() || self.storage.request_timeout.is_zero() {
            return Err(anyhow::anyhow!("Upstream timeouts must be greater than zero"));
        }

        if self.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must not be empty"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    /// Whether a listed object name carries one of the allowed extensions (case-insensitive).
    pub fn has_allowed_extension(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.allowed_extensions
            .iter()
            .any(|ext| lower.ends_with(&format!(".{}", ext)))
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_secs(raw: Option<String>, name: &str, default: u64) -> Result<u64, anyhow::Error> {
    match raw {
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a whole number of seconds", name)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("default config");
        assert_eq!(config.server_port, 5050);
        assert_eq!(config.buckets.images, "bird_cam_images");
        assert_eq!(config.buckets.videos, "bird_cam_videos");
        assert_eq!(
            config.storage.api_base_url,
            "https://storage.googleapis.com/storage/v1"
        );
        assert_eq!(config.allowed_extensions, vec!["jpg", "jpeg", "png", "mp4"]);
        assert!(config.allows_any_origin());
        assert!(!config.is_production());
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("IMAGES_BUCKET", "stills"),
            ("VIDEOS_BUCKET", "clips"),
            ("STORAGE_API_BASE_URL", "http://127.0.0.1:4443/storage/v1/"),
            ("MEDIA_ALLOWED_EXTENSIONS", ".JPG, webm"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("ENVIRONMENT", "Production"),
            ("LOG_FORMAT", "json"),
        ])
        .expect("config");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.buckets.bucket_for(MediaType::Images), "stills");
        assert_eq!(config.buckets.bucket_for(MediaType::Videos), "clips");
        assert_eq!(
            config.storage.listing_url("clips"),
            "http://127.0.0.1:4443/storage/v1/b/clips/o"
        );
        assert_eq!(config.allowed_extensions, vec!["jpg", "webm"]);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(!config.allows_any_origin());
        assert!(config.is_production());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("VIDEOS_BUCKET", "  ")]).is_err());
        assert!(config_from(&[("STORAGE_PUBLIC_BASE_URL", "ftp://x")]).is_err());
        assert!(config_from(&[("MEDIA_ALLOWED_EXTENSIONS", " , ")]).is_err());
        assert!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_has_allowed_extension_is_case_insensitive() {
        let config = Config::default();
        assert!(config.has_allowed_extension("a.jpg"));
        assert!(config.has_allowed_extension("B.JPEG"));
        assert!(config.has_allowed_extension("clip.Mp4"));
        assert!(!config.has_allowed_extension("notes.txt"));
        assert!(!config.has_allowed_extension("jpg"));
        assert!(!config.has_allowed_extension("archive.mp4.zip"));
    }

    #[test]
    fn test_public_url_joins_segments() {
        let endpoints = StorageEndpoints::default();
        assert_eq!(
            endpoints.public_url("bird_cam_images", "robin%20at%20dawn.jpg"),
            "https://storage.googleapis.com/bird_cam_images/robin%20at%20dawn.jpg"
        );
    }
}
