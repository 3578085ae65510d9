//! Character command handler.

use super::print_payload;
use delulu::{
    CharacterQuery, DeluluConfig, DeluluResult, Payload, ValidationError, ValidationErrorKind,
    build_state, decode_and_verify,
};
use std::path::Path;
use tracing::instrument;

/// Look up a character by name or by photo and print it.
#[instrument(skip(config))]
pub async fn run_character(
    config: &DeluluConfig,
    name: Option<String>,
    image: Option<&Path>,
) -> DeluluResult<()> {
    let query = match (name, image) {
        (Some(name), _) => CharacterQuery::Name(name),
        (None, Some(path)) => {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                ValidationError::new(ValidationErrorKind::InvalidImage(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            let image = decode_and_verify(&bytes)?;
            CharacterQuery::Photo {
                bytes: image.bytes,
                mime: image.mime,
            }
        }
        (None, None) => return Err(ValidationError::new(ValidationErrorKind::MissingFile).into()),
    };

    let state = build_state(config)?;
    let profile = state.characters().lookup(&query).await;
    print_payload(&Payload::from(profile))
}
