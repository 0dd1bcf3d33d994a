//! Object name validation.
//!
//! Names arrive from the request path, so they are checked before being
//! spliced into an upstream URL.

use crate::traits::{StorageError, StorageResult};

/// Reject names that could address something other than a single object in the bucket.
pub fn validate_object_name(name: &str) -> StorageResult<()> {
    if name.is_empty() {
        return Err(StorageError::InvalidKey(
            "Object name must not be empty".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(StorageError::InvalidKey(format!(
            "Object name '{}' is not allowed",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(StorageError::InvalidKey(
            "Object name must not contain path separators".to_string(),
        ));
    }

    if name.chars().any(char::is_control) {
        return Err(StorageError::InvalidKey(
            "Object name must not contain control characters".to_string(),
        ));
    }

    Ok(())
}
