//! Trait definitions for generation backends.

use async_trait::async_trait;
use delulu_core::StructuredRequest;
use delulu_error::GenerationResult;

/// A text model that can answer with schema-constrained JSON.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send the prompt parts and schema, returning the raw text of the answer.
    ///
    /// Implementations return `EmptyResponse` when the provider produced no
    /// text at all. Parsing is left to [`generate_structured`](crate::generate_structured).
    async fn generate_json(&self, request: &StructuredRequest) -> GenerationResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}

/// Bytes of one generated image.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GeneratedImage {
    /// Encoded image data
    bytes: Vec<u8>,
    /// MIME type reported by the provider
    mime_type: String,
}

impl GeneratedImage {
    /// Wrap encoded image bytes.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// An image model that renders one picture per prompt.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate exactly one image for `prompt`.
    ///
    /// A result withheld by the provider's safety filter, or one without any
    /// bytes, is `GenerationErrorKind::Filtered`.
    async fn generate_image(&self, prompt: &str) -> GenerationResult<GeneratedImage>;

    /// Provider name (e.g., "imagen").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}
