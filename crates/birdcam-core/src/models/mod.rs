//! Data models for the application
//!
//! `media` holds the client-facing listing shapes; `object` holds the raw
//! metadata returned by the object-storage listing API.

mod media;
mod object;

pub use media::{InvalidMediaType, MediaFile, MediaType};
pub use object::{BucketListing, ObjectMetadata};
