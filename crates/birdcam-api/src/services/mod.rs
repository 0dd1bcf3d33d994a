//! Request-level services behind the HTTP handlers.
//!
//! Both take the storage client and configuration as arguments so they can be
//! exercised with a fake `StorageClient`.

pub mod media_lister;
pub mod video_proxy;
