//! Story segment pipeline.

use crate::prompt::{scene_image_prompt, story_parts};
use delulu_core::{GenerationRequest, StoryImage, StoryResponse};
use delulu_interface::{ImageCache, ImageGenerator, TextGenerator, generate_structured};
use delulu_storage::{IMAGE_CONTENT_TYPE, derive_key};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// How an illustration attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ImageOutcome {
    /// Nothing to illustrate
    #[display("skipped")]
    Skipped,
    /// A cached image was reused
    #[display("cache hit: {}", _0)]
    CacheHit(String),
    /// A new image was generated and stored
    #[display("generated: {}", _0)]
    Generated(String),
    /// No image could be produced
    #[display("unavailable: {}", _0)]
    Unavailable(String),
}

impl ImageOutcome {
    /// Public URL of the image, when there is one.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageOutcome::CacheHit(url) | ImageOutcome::Generated(url) => Some(url),
            ImageOutcome::Skipped | ImageOutcome::Unavailable(_) => None,
        }
    }
}

/// Runs one story request end to end: text, then at most one scene image.
///
/// Generators and cache are shared trait objects, so one orchestrator
/// serves every request for the life of the process.
#[derive(Clone)]
pub struct StoryOrchestrator {
    text: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageGenerator>,
    cache: Arc<dyn ImageCache>,
}

impl std::fmt::Debug for StoryOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryOrchestrator")
            .field("text_model", &self.text.model_name())
            .field("image_model", &self.images.model_name())
            .field("cache", &self.cache.backend_name())
            .finish()
    }
}

impl StoryOrchestrator {
    /// Wire an orchestrator from its three collaborators.
    pub fn new(
        text: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageGenerator>,
        cache: Arc<dyn ImageCache>,
    ) -> Self {
        Self {
            text,
            images,
            cache,
        }
    }

    /// Generate the next story segment.
    ///
    /// `None` when the model produced nothing usable, whatever the reason;
    /// the caller should try again. Any `story_images` the model wrote are
    /// discarded: the list holds exactly one entry when the segment enters a
    /// new location and an image could be found or made, and is empty otherwise.
    #[instrument(
        skip(self, request),
        fields(
            text_model = self.text.model_name(),
            cache = self.cache.backend_name()
        )
    )]
    pub async fn generate_segment(&self, request: &GenerationRequest) -> Option<StoryResponse> {
        let parts = story_parts(request);

        let mut story = match generate_structured::<StoryResponse, _>(self.text.as_ref(), parts)
            .await
        {
            Ok(Some(story)) => story,
            Ok(None) => {
                debug!("Text model answered null");
                return None;
            }
            Err(e) if e.kind.is_credential_fault() => {
                error!(error = %e, "Text model rejected our credentials");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Story generation failed");
                return None;
            }
        };

        story.story_images.clear();

        if let Some(description) = story.story_state.scene_to_illustrate().map(str::to_string) {
            let outcome = self.illustrate(&description).await;
            debug!(outcome = %outcome, "Scene illustration finished");
            if let Some(url) = outcome.url() {
                story.story_images.push(StoryImage {
                    url: url.to_string(),
                    description,
                });
            }
        }

        info!(
            choices = story.choices.len(),
            images = story.story_images.len(),
            story_over = story.story_over,
            "Story segment generated"
        );
        Some(story)
    }

    /// Find or make the image for a location description.
    ///
    /// Cache lookup failures count as misses. Generation and store failures
    /// end in [`ImageOutcome::Unavailable`]; nothing here is an error.
    #[instrument(skip(self, description), fields(key))]
    pub async fn illustrate(&self, description: &str) -> ImageOutcome {
        if description.trim().is_empty() {
            return ImageOutcome::Skipped;
        }

        let key = derive_key(description);
        tracing::Span::current().record("key", key.as_str());

        match self.cache.lookup(&key).await {
            Ok(Some(url)) => {
                debug!(url = %url, "Scene image cache hit");
                return ImageOutcome::CacheHit(url);
            }
            Ok(None) => debug!("Scene image cache miss"),
            Err(e) => warn!(error = %e, "Cache lookup failed, generating instead"),
        }

        let image = match self
            .images
            .generate_image(&scene_image_prompt(description))
            .await
        {
            Ok(image) => image,
            Err(e) if e.kind.is_filtered() => {
                info!(error = %e, "Scene image withheld by the provider");
                return ImageOutcome::Unavailable(e.kind.to_string());
            }
            Err(e) => {
                warn!(error = %e, "Scene image generation failed");
                return ImageOutcome::Unavailable(e.kind.to_string());
            }
        };

        match self
            .cache
            .store(&key, image.bytes(), IMAGE_CONTENT_TYPE)
            .await
        {
            Ok(url) => {
                info!(url = %url, bytes = image.bytes().len(), "Stored new scene image");
                ImageOutcome::Generated(url)
            }
            Err(e) => {
                warn!(error = %e, "Failed to store scene image");
                ImageOutcome::Unavailable(e.kind.to_string())
            }
        }
    }
}
