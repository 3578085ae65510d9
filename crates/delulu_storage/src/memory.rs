//! Process-local image cache.

use crate::{CacheKey, ImageCache, object_name};
use delulu_error::StorageResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredImage {
    bytes: Vec<u8>,
    content_type: String,
}

/// In-memory cache backend, for tests and offline runs.
///
/// URLs have the form `memory://{folder}/{key}.jpg` and can be resolved
/// with [`fetch`](InMemoryImageCache::fetch). Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageCache {
    folder: String,
    entries: Arc<RwLock<HashMap<String, StoredImage>>>,
}

impl InMemoryImageCache {
    /// Create an empty cache namespaced under `folder`.
    pub fn new(folder: impl AsRef<str>) -> Self {
        Self {
            folder: folder.as_ref().trim_matches('/').to_string(),
            entries: Arc::default(),
        }
    }

    fn url_for(&self, key: &CacheKey) -> String {
        format!("memory://{}", object_name(&self.folder, key))
    }

    /// Resolve a URL handed out by this cache to `(bytes, content_type)`.
    pub async fn fetch(&self, url: &str) -> Option<(Vec<u8>, String)> {
        let name = url.strip_prefix("memory://")?;
        let entries = self.entries.read().await;
        entries
            .get(name)
            .map(|image| (image.bytes.clone(), image.content_type.clone()))
    }

    /// Number of stored images.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ImageCache for InMemoryImageCache {
    async fn lookup(&self, key: &CacheKey) -> StorageResult<Option<String>> {
        let name = object_name(&self.folder, key);
        let hit = self.entries.read().await.contains_key(&name);
        Ok(hit.then(|| self.url_for(key)))
    }

    #[tracing::instrument(skip(self, key, bytes), fields(key = %key, size = bytes.len()))]
    async fn store(
        &self,
        key: &CacheKey,
        bytes: &[u8],
        content_type: &str,
    ) -> StorageResult<String> {
        let name = object_name(&self.folder, key);
        self.entries.write().await.insert(
            name,
            StoredImage {
                bytes: bytes.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        tracing::debug!("Stored scene image in memory");
        Ok(self.url_for(key))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
