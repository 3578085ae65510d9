//! Character detail lookups.

use crate::prompt::character_prompt;
use delulu_core::{CharacterProfile, CharacterQuery};
use delulu_interface::{TextGenerator, generate_structured};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Looks up known people and characters by name or photo.
#[derive(Clone)]
pub struct CharacterService {
    text: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for CharacterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterService")
            .field("text_model", &self.text.model_name())
            .finish()
    }
}

impl CharacterService {
    /// Service backed by `text`.
    pub fn new(text: Arc<dyn TextGenerator>) -> Self {
        Self { text }
    }

    /// Details for the character `query` points at.
    ///
    /// `None` when the model does not recognise the subject, or when the
    /// lookup fails for any reason.
    #[instrument(skip(self, query), fields(subject = query.label(), model = self.text.model_name()))]
    pub async fn lookup(&self, query: &CharacterQuery) -> Option<CharacterProfile> {
        match generate_structured::<CharacterProfile, _>(self.text.as_ref(), character_prompt(query))
            .await
        {
            Ok(Some(profile)) => {
                info!(name = %profile.name, "Character recognised");
                Some(profile)
            }
            Ok(None) => {
                debug!("Character not recognised");
                None
            }
            Err(e) if e.kind.is_credential_fault() => {
                error!(error = %e, "Text model rejected our credentials");
                None
            }
            Err(e) => {
                warn!(error = %e, "Character lookup failed");
                None
            }
        }
    }
}
