//! Character types.

use serde::{Deserialize, Serialize};

/// A member of the player's roster, as sent by the client.
///
/// Only `name` is mandatory; the rest is whatever the player filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Character {
    /// Display name
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Free-form gender
    #[serde(default)]
    pub gender: Option<String>,
    /// Personality traits, typically "word emoji"
    #[serde(default)]
    pub personality: Option<Vec<String>>,
    /// Job or role
    #[serde(default)]
    pub occupation: Option<String>,
    /// Player-authored extras
    #[serde(default, rename = "customElements")]
    pub custom_elements: Option<String>,
}

/// Character details produced by the text model.
///
/// # Examples
///
/// ```
/// use delulu_core::CharacterProfile;
///
/// let json = r#"{
///     "name": "Sherlock Holmes",
///     "age": 40,
///     "personality": ["observant 🔍", "eccentric 🎻"],
///     "occupation": "Detective 🕵️",
///     "gender": "male"
/// }"#;
/// let profile: CharacterProfile = serde_json::from_str(json).unwrap();
/// assert_eq!(profile.occupation, "Detective 🕵️");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Character name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Personality traits, one word plus an emoji each
    pub personality: Vec<String>,
    /// Best-known occupation with a trailing emoji
    pub occupation: String,
    /// Gender
    pub gender: String,
}

/// Body of `POST /generate-character-details-name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterNameRequest {
    /// Name to look up
    pub name: String,
}

/// What a character lookup is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterQuery {
    /// Lookup by a person's or character's name
    Name(String),
    /// Lookup from a validated photo
    Photo {
        /// Raw image bytes
        bytes: Vec<u8>,
        /// Detected MIME type
        mime: String,
    },
}

impl CharacterQuery {
    /// Short label used in logs; never includes image data.
    pub fn label(&self) -> &str {
        match self {
            CharacterQuery::Name(name) => name,
            CharacterQuery::Photo { .. } => "<photo>",
        }
    }
}
