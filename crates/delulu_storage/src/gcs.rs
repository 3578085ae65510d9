//! Google Cloud Storage image cache over the JSON API.
//!
//! Existence is checked with an object metadata GET; writes use a simple
//! media upload. The bucket is expected to be publicly readable, so the
//! locator handed back is the plain `storage.googleapis.com` URL.

use crate::{CacheKey, ImageCache, object_name};
use delulu_error::{StorageError, StorageErrorKind, StorageResult};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default JSON API endpoint.
pub const GCS_API_BASE: &str = "https://storage.googleapis.com";

/// Connection settings for [`GcsImageCache`].
///
/// # Examples
///
/// ```
/// use delulu_storage::GcsOptions;
///
/// let options = GcsOptions::builder()
///     .bucket("delulu-scenes")
///     .folder("stories")
///     .build()
///     .unwrap();
/// assert_eq!(options.api_base(), "https://storage.googleapis.com");
/// assert_eq!(*options.timeout_secs(), 30);
/// ```
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GcsOptions {
    /// Bucket name
    bucket: String,
    /// Folder (object name prefix) inside the bucket
    #[builder(default)]
    folder: String,
    /// OAuth2 bearer token; anonymous requests when absent
    #[builder(default)]
    access_token: Option<String>,
    /// JSON API base URL
    #[builder(default = "GCS_API_BASE.to_string()")]
    api_base: String,
    /// Base for public object URLs
    #[builder(default = "GCS_API_BASE.to_string()")]
    public_base: String,
    /// Per-call timeout
    #[builder(default = "30")]
    timeout_secs: u64,
}

impl GcsOptions {
    /// Creates a new options builder.
    pub fn builder() -> GcsOptionsBuilder {
        GcsOptionsBuilder::default()
    }
}

/// Image cache backed by a Google Cloud Storage bucket.
#[derive(Debug, Clone)]
pub struct GcsImageCache {
    client: Client,
    api_base: Url,
    options: GcsOptions,
}

impl GcsImageCache {
    /// Creates a new GCS cache.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the bucket is empty, the API base is not a
    /// URL, or the HTTP client cannot be built.
    pub fn new(options: GcsOptions) -> StorageResult<Self> {
        if options.bucket.trim().is_empty() {
            return Err(StorageError::new(StorageErrorKind::InvalidConfig(
                "bucket name is empty".to_string(),
            )));
        }

        let api_base = Url::parse(&options.api_base).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidConfig(format!(
                "api_base {}: {}",
                options.api_base, e
            )))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()
            .map_err(|e| {
                StorageError::new(StorageErrorKind::InvalidConfig(format!(
                    "HTTP client: {}",
                    e
                )))
            })?;

        debug!(bucket = %options.bucket, folder = %options.folder, "Creating GCS image cache");
        Ok(Self {
            client,
            api_base,
            options,
        })
    }

    fn public_url(&self, object: &str) -> String {
        format!(
            "{}/{}/{}",
            self.options.public_base.trim_end_matches('/'),
            self.options.bucket,
            object
        )
    }

    /// `{api_base}/{prefix...}/b/{bucket}/o[/{object}]` with each part percent-encoded.
    fn endpoint(&self, prefix: &[&str], object: Option<&str>) -> StorageResult<Url> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                StorageError::new(StorageErrorKind::InvalidConfig(format!(
                    "api_base {} cannot carry a path",
                    self.api_base
                )))
            })?;
            segments.pop_if_empty();
            segments.extend(prefix);
            segments.extend(["b", self.options.bucket.as_str(), "o"]);
            if let Some(object) = object {
                segments.push(object);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.options.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send_error(&self, e: reqwest::Error, on_other: fn(String) -> StorageErrorKind) -> StorageError {
        if e.is_timeout() {
            StorageError::new(StorageErrorKind::Timeout(self.options.timeout_secs))
        } else {
            StorageError::new(on_other(e.to_string()))
        }
    }
}

fn status_error(status: StatusCode, body: String, on_other: fn(String) -> StorageErrorKind) -> StorageError {
    let message = format!("{}: {}", status, body);
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        StorageError::new(StorageErrorKind::PermissionDenied(message))
    } else {
        StorageError::new(on_other(message))
    }
}

#[async_trait::async_trait]
impl ImageCache for GcsImageCache {
    #[instrument(skip(self, key), fields(key = %key, bucket = %self.options.bucket))]
    async fn lookup(&self, key: &CacheKey) -> StorageResult<Option<String>> {
        let object = object_name(&self.options.folder, key);
        let url = self.endpoint(&["storage", "v1"], Some(&object))?;

        let response = self
            .authorize(self.client.get(url))
            .query(&[("fields", "name")])
            .send()
            .await
            .map_err(|e| self.send_error(e, StorageErrorKind::Lookup))?;

        match response.status() {
            status if status.is_success() => {
                debug!(object = %object, "Cache hit");
                Ok(Some(self.public_url(&object)))
            }
            StatusCode::NOT_FOUND => {
                debug!(object = %object, "Cache miss");
                Ok(None)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, "GCS metadata lookup failed");
                Err(status_error(status, body, StorageErrorKind::Lookup))
            }
        }
    }

    #[instrument(skip(self, key, bytes), fields(key = %key, size = bytes.len(), bucket = %self.options.bucket))]
    async fn store(
        &self,
        key: &CacheKey,
        bytes: &[u8],
        content_type: &str,
    ) -> StorageResult<String> {
        let object = object_name(&self.options.folder, key);
        let mut url = self.endpoint(&["upload", "storage", "v1"], None)?;
        url.query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("name", &object);

        let response = self
            .authorize(self.client.post(url))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| self.send_error(e, StorageErrorKind::Upload))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "GCS upload failed");
            return Err(status_error(status, body, StorageErrorKind::Upload));
        }

        let url = self.public_url(&object);
        info!(url = %url, "Stored scene image in GCS");
        Ok(url)
    }

    fn backend_name(&self) -> &'static str {
        "gcs"
    }
}
