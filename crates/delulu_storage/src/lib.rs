//! Content-addressed scene image cache for Delulu.
//!
//! Scene images are stored under a key derived from the location description
//! they illustrate, so revisiting a described location reuses the image that
//! was generated the first time.
//!
//! # Features
//!
//! - **Deterministic keys**: [`derive_key`] is a pure function of the description bytes
//! - **Pluggable backends**: Google Cloud Storage, local filesystem, process memory
//! - **Public locators**: every backend hands back a URL the web client can load directly
//!
//! # Example
//!
//! ```rust
//! use delulu_storage::{ImageCache, InMemoryImageCache, derive_key};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = InMemoryImageCache::new("stories");
//! let key = derive_key("A moonlit greenhouse full of orchids");
//!
//! assert!(cache.lookup(&key).await?.is_none());
//! let url = cache.store(&key, b"jpeg bytes", "image/jpeg").await?;
//! assert_eq!(cache.lookup(&key).await?, Some(url));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use delulu_error::StorageResult;

mod filesystem;
mod gcs;
mod key;
mod memory;

pub use delulu_error::{StorageError, StorageErrorKind};
pub use filesystem::FileSystemImageCache;
pub use gcs::{GcsImageCache, GcsOptions, GcsOptionsBuilder};
pub use key::{CacheKey, derive_key};
pub use memory::InMemoryImageCache;

/// Content type of every cached scene image.
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Trait for scene image cache backends.
///
/// Implementations share one flat namespace per configured folder, with
/// objects named `{folder}/{key}.jpg`.
#[async_trait::async_trait]
pub trait ImageCache: Send + Sync {
    /// Public URL of the image stored under `key`, if there is one.
    ///
    /// A miss is `Ok(None)`. Errors mean the existence check itself failed.
    async fn lookup(&self, key: &CacheKey) -> StorageResult<Option<String>>;

    /// Write (or overwrite) the image stored under `key`.
    ///
    /// Returns the URL a following [`lookup`](ImageCache::lookup) will report.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write does not complete.
    async fn store(&self, key: &CacheKey, bytes: &[u8], content_type: &str)
    -> StorageResult<String>;

    /// Backend name (e.g., "gcs", "filesystem", "memory").
    fn backend_name(&self) -> &'static str;
}

/// Object name for `key` under `folder`.
pub(crate) fn object_name(folder: &str, key: &CacheKey) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        format!("{}.jpg", key)
    } else {
        format!("{}/{}.jpg", folder, key)
    }
}
