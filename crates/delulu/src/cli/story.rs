//! Story command handler.

use super::print_payload;
use delulu::{
    ConfigError, DeluluConfig, DeluluResult, GenerationRequest, JsonError, Payload, StoryContext,
    build_state,
};
use std::path::Path;
use tracing::{debug, instrument};

/// Generate one segment from a prompt or a context file and print it.
#[instrument(skip(config, prompt))]
pub async fn run_story(
    config: &DeluluConfig,
    prompt: Option<String>,
    context: Option<&Path>,
) -> DeluluResult<()> {
    let request = match (prompt, context) {
        (Some(prompt), _) => GenerationRequest::Prompt { prompt },
        (None, Some(path)) => GenerationRequest::Context(read_context(path).await?),
        (None, None) => {
            return Err(ConfigError::new("Either --prompt or --context is required").into());
        }
    };

    let state = build_state(config)?;
    let story = state.orchestrator().generate_segment(&request).await;
    print_payload(&Payload::from(story))
}

async fn read_context(path: &Path) -> DeluluResult<StoryContext> {
    debug!(path = %path.display(), "Reading story context");
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        JsonError::new(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let context = serde_json::from_str(&text).map_err(|e| {
        JsonError::new(format!("Invalid story context in {}: {}", path.display(), e))
    })?;
    Ok(context)
}
