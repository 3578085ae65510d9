//! Shared application state.

use delulu_interface::{ImageCache, ImageGenerator, TextGenerator};
use delulu_narrative::{CharacterService, StoryOrchestrator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Names of the configured collaborators, as reported by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServiceInfo {
    /// Text model identifier
    text_model: String,
    /// Image model identifier
    image_model: String,
    /// Cache backend name
    cache: String,
}

/// Process-wide handles shared by every request.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    orchestrator: StoryOrchestrator,
    characters: CharacterService,
    services: Arc<ServiceInfo>,
    static_dir: Option<PathBuf>,
}

impl AppState {
    /// Wire the state from its collaborators.
    pub fn new(
        text: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageGenerator>,
        cache: Arc<dyn ImageCache>,
    ) -> Self {
        let services = ServiceInfo {
            text_model: text.model_name().to_string(),
            image_model: images.model_name().to_string(),
            cache: cache.backend_name().to_string(),
        };
        Self {
            characters: CharacterService::new(Arc::clone(&text)),
            orchestrator: StoryOrchestrator::new(text, images, cache),
            services: Arc::new(services),
            static_dir: None,
        }
    }

    /// Serve this directory under `/cache`.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Story pipeline.
    pub fn orchestrator(&self) -> &StoryOrchestrator {
        &self.orchestrator
    }

    /// Character lookups.
    pub fn characters(&self) -> &CharacterService {
        &self.characters
    }

    /// Configured collaborators.
    pub fn services(&self) -> &ServiceInfo {
        &self.services
    }

    /// Directory served under `/cache`, if any.
    pub fn static_dir(&self) -> Option<&PathBuf> {
        self.static_dir.as_ref()
    }
}
