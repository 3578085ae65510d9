//! Inbound story requests and outbound structured model requests.

use crate::{Character, Input, StoryConfig};
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-story-segment`.
///
/// Two shapes are accepted: a ready-made prompt, or the context bundle the
/// web client keeps between turns.
///
/// # Examples
///
/// ```
/// use delulu_core::GenerationRequest;
///
/// let req: GenerationRequest = serde_json::from_str(r#"{"prompt": "Begin."}"#).unwrap();
/// assert!(matches!(req, GenerationRequest::Prompt { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationRequest {
    /// Free-form continuation prompt
    Prompt {
        /// Prompt text passed to the model as-is
        prompt: String,
    },
    /// Structured context assembled into a prompt server-side
    Context(StoryContext),
}

/// Roster, settings and history for a story in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryContext {
    /// Characters taking part
    pub characters: Vec<Character>,
    /// Story settings
    pub story_config: StoryConfig,
    /// Summaries of previous segments, oldest first
    #[serde(default)]
    pub plot_summary: Vec<String>,
    /// What the player chose last, empty at the start
    #[serde(default)]
    pub last_action: String,
}

/// A schema-constrained request for the text model.
///
/// # Examples
///
/// ```
/// use delulu_core::{Input, StructuredRequest};
/// use serde_json::json;
///
/// let request = StructuredRequest::builder()
///     .parts(vec![Input::Text("Tell me a story".to_string())])
///     .schema(json!({"type": "OBJECT"}))
///     .build()
///     .unwrap();
/// assert_eq!(request.parts().len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StructuredRequest {
    /// Prompt parts, in order
    parts: Vec<Input>,
    /// Response schema the model must follow
    schema: serde_json::Value,
}

impl StructuredRequest {
    /// Request for `parts` constrained to `schema`.
    pub fn new(parts: Vec<Input>, schema: serde_json::Value) -> Self {
        Self { parts, schema }
    }

    /// Creates a new request builder.
    pub fn builder() -> StructuredRequestBuilder {
        StructuredRequestBuilder::default()
    }

    /// Total length of the text parts, for logging.
    pub fn text_len(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                Input::Text(text) => text.len(),
                Input::Image { .. } => 0,
            })
            .sum()
    }
}
