//! Typed, schema-constrained generation on top of [`TextGenerator`].

use crate::{TextGenerator, extract_json};
use delulu_core::{Input, ResponseSchema, StructuredRequest};
use delulu_error::{GenerationError, GenerationErrorKind, GenerationResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Ask `generator` for a `T` and parse the answer.
///
/// - No text at all is `EmptyResponse`.
/// - Text that is not JSON, or JSON that does not fit `T`, is `MalformedPayload`.
/// - JSON `null`, or an object whose fields are all `null`, is `Ok(None)`: the
///   model was told to answer that way when it does not know the subject.
///
/// # Errors
///
/// Any error from the generator is passed through unchanged.
#[instrument(
    skip(generator, parts),
    fields(
        provider = generator.provider_name(),
        model = generator.model_name(),
        parts = parts.len()
    )
)]
pub async fn generate_structured<T, G>(generator: &G, parts: Vec<Input>) -> GenerationResult<Option<T>>
where
    T: ResponseSchema + DeserializeOwned,
    G: TextGenerator + ?Sized,
{
    let request = StructuredRequest::new(parts, T::response_schema());
    let text = generator.generate_json(&request).await?;

    if text.trim().is_empty() {
        warn!("Model returned no text");
        return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
    }

    let json = extract_json(&text).ok_or_else(|| {
        warn!(response_length = text.len(), "Model answer contains no JSON");
        GenerationError::new(GenerationErrorKind::MalformedPayload(
            "no JSON document in response".to_string(),
        ))
    })?;

    let value: Value = serde_json::from_str(&json).map_err(|e| {
        warn!(error = %e, "Model answer is not valid JSON");
        GenerationError::new(GenerationErrorKind::MalformedPayload(e.to_string()))
    })?;

    if is_null_like(&value) {
        debug!("Model answered null");
        return Ok(None);
    }

    let parsed = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "Model answer does not match the schema");
        GenerationError::new(GenerationErrorKind::MalformedPayload(e.to_string()))
    })?;

    debug!("Parsed structured response");
    Ok(Some(parsed))
}

fn is_null_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(fields) => fields.values().all(Value::is_null),
        _ => false,
    }
}
