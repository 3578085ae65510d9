//! Builds the process-wide clients from configuration.

use crate::{AppState, CacheBackend, DeluluConfig};
use delulu_error::{ConfigError, DeluluResult};
use delulu_interface::{ImageCache, ImageGenerator, TextGenerator};
use delulu_models::{GeminiClient, GoogleApiConfig, ImagenClient};
use delulu_storage::{FileSystemImageCache, GcsImageCache, GcsOptions, InMemoryImageCache};
use std::sync::Arc;
use tracing::{info, instrument};

/// Construct every collaborator once and wire them into an [`AppState`].
///
/// # Errors
///
/// `MissingApiKey` when the key for the selected billing mode is absent, and
/// configuration or storage errors when the cache backend cannot be set up.
#[instrument(skip_all, fields(mode = config.models.mode(), cache = %config.cache.backend))]
pub fn build_state(config: &DeluluConfig) -> DeluluResult<AppState> {
    let models = &config.models;
    let api = GoogleApiConfig::builder()
        .api_key(models.selected_api_key()?)
        .api_base(models.api_base.as_str())
        .timeout_secs(models.timeout_secs)
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid model settings: {}", e)))?;

    let text: Arc<dyn TextGenerator> =
        Arc::new(GeminiClient::new(api.clone(), models.text_model.as_str())?);
    let images: Arc<dyn ImageGenerator> = Arc::new(
        ImagenClient::new(api, models.image_model.as_str())?
            .with_aspect_ratio(models.aspect_ratio.as_str()),
    );
    let cache = build_cache(config)?;

    info!(
        text_model = %models.text_model,
        image_model = %models.image_model,
        "Clients initialised"
    );

    let state = AppState::new(text, images, cache);
    Ok(match config.cache.backend {
        CacheBackend::Filesystem => state.with_static_dir(&config.cache.root),
        CacheBackend::Gcs | CacheBackend::Memory => state,
    })
}

/// Construct the configured image cache backend.
///
/// The `filesystem` backend hands out URLs under
/// [`DeluluConfig::cache_public_base_url`].
///
/// # Errors
///
/// Fails when the GCS bucket is missing or the filesystem root cannot be created.
pub fn build_cache(config: &DeluluConfig) -> DeluluResult<Arc<dyn ImageCache>> {
    let settings = &config.cache;
    let cache: Arc<dyn ImageCache> = match settings.backend {
        CacheBackend::Gcs => {
            let bucket = settings
                .bucket
                .as_deref()
                .ok_or_else(|| ConfigError::new("cache.bucket is required for the gcs backend"))?;
            let mut options = GcsOptions::builder();
            options
                .bucket(bucket)
                .folder(settings.folder.as_str())
                .access_token(settings.access_token.clone())
                .timeout_secs(settings.timeout_secs);
            if let Some(api_base) = &settings.api_base {
                options.api_base(api_base.as_str());
            }
            let options = options
                .build()
                .map_err(|e| ConfigError::new(format!("Invalid cache settings: {}", e)))?;
            Arc::new(GcsImageCache::new(options)?)
        }
        CacheBackend::Filesystem => Arc::new(FileSystemImageCache::new(
            &settings.root,
            &settings.folder,
            config.cache_public_base_url(),
        )?),
        CacheBackend::Memory => Arc::new(InMemoryImageCache::new(&settings.folder)),
    };
    info!(backend = cache.backend_name(), folder = %settings.folder, "Image cache ready");
    Ok(cache)
}
