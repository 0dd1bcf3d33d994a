use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

/// Media type enum
///
/// Each variant maps to exactly one bucket (see `BucketConfig`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Images,
    Videos,
}

impl MediaType {
    pub const ALL: [MediaType; 2] = [MediaType::Images, MediaType::Videos];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Images => "images",
            MediaType::Videos => "videos",
        }
    }
}

/// Returned when a path segment does not name a known media type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid media type: {0}")]
pub struct InvalidMediaType(pub String);

impl FromStr for MediaType {
    type Err = InvalidMediaType;

    // Matching is exact: `Images` or `VIDEOS` are rejected like any other unknown value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "images" => Ok(MediaType::Images),
            "videos" => Ok(MediaType::Videos),
            other => Err(InvalidMediaType(other.to_string())),
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A single entry of a media listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaFile {
    /// Object key in the bucket
    #[schema(example = "2024-05-01_07-31-12.mp4")]
    pub name: String,
    /// Direct storage URL for images, same-origin proxy path for videos
    #[schema(example = "/api/video/2024-05-01_07-31-12.mp4")]
    pub url: String,
    /// Object size in bytes
    pub size: Option<u64>,
    /// Last-modified timestamp as reported by the storage service
    #[schema(example = "2024-05-01T07:31:20.123Z")]
    pub updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_str() {
        assert_eq!("images".parse::<MediaType>(), Ok(MediaType::Images));
        assert_eq!("videos".parse::<MediaType>(), Ok(MediaType::Videos));
    }

    #[test]
    fn test_media_type_rejects_unknown_values() {
        for value in ["", "image", "video", "Images", "VIDEOS", "audio", "images/"] {
            let err = value.parse::<MediaType>().unwrap_err();
            assert_eq!(err, InvalidMediaType(value.to_string()));
        }
    }

    #[test]
    fn test_media_type_display_round_trips() {
        for media_type in MediaType::ALL {
            assert_eq!(media_type.to_string().parse::<MediaType>(), Ok(media_type));
        }
    }

    #[test]
    fn test_media_file_serializes_missing_fields_as_null() {
        let file = MediaFile {
            name: "a.jpg".to_string(),
            url: "https://storage.googleapis.com/bucket/a.jpg".to_string(),
            size: None,
            updated: None,
        };
        let json = serde_json::to_value(&file).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "a.jpg",
                "url": "https://storage.googleapis.com/bucket/a.jpg",
                "size": null,
                "updated": null
            })
        );
    }
}
