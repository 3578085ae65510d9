//! Mock image generator for testing.

use async_trait::async_trait;
use delulu_error::{GenerationError, GenerationErrorKind, GenerationResult};
use delulu_interface::{GeneratedImage, ImageGenerator};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock images.
#[derive(Debug, Clone)]
pub enum ImageBehavior {
    /// Return these bytes as a JPEG
    Success(Vec<u8>),
    /// Always return the specified error
    Error(GenerationErrorKind),
}

/// Mock image generator that records prompts.
pub struct MockImageGenerator {
    behavior: ImageBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerator {
    /// Mock returning a few fake JPEG bytes.
    pub fn new_success() -> Self {
        Self::new(ImageBehavior::Success(vec![0xFF, 0xD8, 0xFF, 0xE0]))
    }

    /// Mock that always fails with `error`.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::new(ImageBehavior::Error(error))
    }

    fn new(behavior: ImageBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of calls made so far.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in order.
    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(&self, prompt: &str) -> GenerationResult<GeneratedImage> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.behavior {
            ImageBehavior::Success(bytes) => Ok(GeneratedImage::new(bytes.clone(), "image/jpeg")),
            ImageBehavior::Error(kind) => Err(GenerationError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}
