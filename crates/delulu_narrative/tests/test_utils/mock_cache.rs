//! Mock image cache for testing.

use async_trait::async_trait;
use delulu_error::{StorageError, StorageErrorKind, StorageResult};
use delulu_interface::{CacheKey, ImageCache};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure injection for the mock cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBehavior {
    /// Behave like a real cache
    Normal,
    /// Every lookup fails
    FailLookup,
    /// Every store fails
    FailStore,
}

/// In-memory cache that counts calls.
pub struct MockImageCache {
    behavior: CacheBehavior,
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    lookups: Arc<Mutex<usize>>,
    stores: Arc<Mutex<usize>>,
}

impl MockImageCache {
    /// Empty cache with the given behavior.
    pub fn new(behavior: CacheBehavior) -> Self {
        Self {
            behavior,
            objects: Arc::new(Mutex::new(HashMap::new())),
            lookups: Arc::new(Mutex::new(0)),
            stores: Arc::new(Mutex::new(0)),
        }
    }

    /// Pre-populate an entry without counting it as a store.
    #[allow(dead_code)]
    pub fn seed(&self, key: &CacheKey) {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), vec![0xFF, 0xD8]);
    }

    /// URL the mock hands out for `key`.
    pub fn url_for(key: &CacheKey) -> String {
        format!("https://cache.test/stories/{}.jpg", key)
    }

    /// Number of lookups so far.
    #[allow(dead_code)]
    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }

    /// Number of stores so far.
    #[allow(dead_code)]
    pub fn store_count(&self) -> usize {
        *self.stores.lock().unwrap()
    }

    /// Whether `key` holds an object.
    #[allow(dead_code)]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.objects.lock().unwrap().contains_key(key.as_str())
    }
}

#[async_trait]
impl ImageCache for MockImageCache {
    async fn lookup(&self, key: &CacheKey) -> StorageResult<Option<String>> {
        *self.lookups.lock().unwrap() += 1;
        if self.behavior == CacheBehavior::FailLookup {
            return Err(StorageError::new(StorageErrorKind::Lookup(
                "bucket unreachable".to_string(),
            )));
        }
        let found = self.objects.lock().unwrap().contains_key(key.as_str());
        Ok(found.then(|| Self::url_for(key)))
    }

    async fn store(&self, key: &CacheKey, bytes: &[u8], _content_type: &str) -> StorageResult<String> {
        *self.stores.lock().unwrap() += 1;
        if self.behavior == CacheBehavior::FailStore {
            return Err(StorageError::new(StorageErrorKind::Upload(
                "quota exceeded".to_string(),
            )));
        }
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(Self::url_for(key))
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
