//! Filesystem-backed image cache.
//!
//! Images are written to `{root}/{folder}/{key}.jpg` and advertised as
//! `{public_base_url}/{folder}/{key}.jpg`; the HTTP server mounts `root`
//! at that base URL.

use crate::{CacheKey, ImageCache, IMAGE_CONTENT_TYPE, object_name};
use delulu_error::{StorageError, StorageErrorKind, StorageResult};
use std::path::PathBuf;

/// Filesystem cache backend.
///
/// # Features
///
/// - **Atomic writes**: Uses temp file + rename, so readers never see a partial image
/// - **Read-after-write**: a completed `store` is visible to the next `lookup`
#[derive(Debug, Clone)]
pub struct FileSystemImageCache {
    root: PathBuf,
    folder: String,
    public_base_url: String,
}

impl FileSystemImageCache {
    /// Create a new filesystem cache.
    ///
    /// Creates `{root}/{folder}` if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip_all)]
    pub fn new(
        root: impl Into<PathBuf>,
        folder: impl AsRef<str>,
        public_base_url: impl Into<String>,
    ) -> StorageResult<Self> {
        let root = root.into();
        let folder = folder.as_ref().trim_matches('/').to_string();
        let dir = root.join(&folder);

        std::fs::create_dir_all(&dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        tracing::info!(path = %dir.display(), "Created filesystem image cache");
        Ok(Self {
            root,
            folder,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Root directory served as the public base URL.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root.join(object_name(&self.folder, key))
    }

    fn url_for(&self, key: &CacheKey) -> String {
        format!("{}/{}", self.public_base_url, object_name(&self.folder, key))
    }
}

#[async_trait::async_trait]
impl ImageCache for FileSystemImageCache {
    #[tracing::instrument(skip(self, key), fields(key = %key))]
    async fn lookup(&self, key: &CacheKey) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Lookup(format!("{}: {}", path.display(), e)))
        })?;

        if exists {
            tracing::debug!(path = %path.display(), "Cache hit");
            Ok(Some(self.url_for(key)))
        } else {
            tracing::debug!(path = %path.display(), "Cache miss");
            Ok(None)
        }
    }

    #[tracing::instrument(skip(self, key, bytes), fields(key = %key, size = bytes.len()))]
    async fn store(
        &self,
        key: &CacheKey,
        bytes: &[u8],
        content_type: &str,
    ) -> StorageResult<String> {
        if content_type != IMAGE_CONTENT_TYPE {
            tracing::warn!(content_type, "Storing non-JPEG bytes under a .jpg name");
        }

        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to a per-call temp file, then rename for atomicity
        let temp_path = path.with_extension(format!("jpg.{}.tmp", uuid::Uuid::new_v4()));
        tokio::fs::write(&temp_path, bytes).await.map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::PermissionDenied {
                StorageErrorKind::PermissionDenied(temp_path.display().to_string())
            } else {
                StorageErrorKind::FileWrite(format!("{}: {}", temp_path.display(), e))
            };
            StorageError::new(kind)
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), size = bytes.len(), "Stored scene image");
        Ok(self.url_for(key))
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
