use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Raw object metadata as returned by the bucket listing API.
///
/// Only the fields the API exposes are kept; everything else in the upstream
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
    #[serde(default)]
    pub updated: Option<String>,
}

impl ObjectMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            updated: None,
        }
    }
}

/// Body of a bucket listing response (`{"kind": ..., "items": [...]}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BucketListing {
    #[serde(default)]
    pub items: Option<Vec<ObjectMetadata>>,
}

impl BucketListing {
    /// Listed objects in upstream order; an absent `items` field means an empty bucket.
    pub fn into_items(self) -> Vec<ObjectMetadata> {
        self.items.unwrap_or_default()
    }
}

/// GCS reports `size` as a decimal string; other stores use a JSON number.
fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(JsonValue::Number(n)) => n.as_u64(),
        Some(JsonValue::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
