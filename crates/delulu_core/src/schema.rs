//! Response schemas for schema-constrained generation.
//!
//! Schemas use the OpenAPI subset understood by the Gemini API
//! (`OBJECT`, `STRING`, `INTEGER`, `BOOLEAN`, `ARRAY`, `nullable`, `required`).

use crate::{CharacterProfile, StoryResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Schema node types.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SchemaType {
    /// JSON object
    Object,
    /// String
    String,
    /// Floating point number
    Number,
    /// Whole number
    Integer,
    /// true/false
    Boolean,
    /// Homogeneous array
    Array,
}

/// Types the text model can be asked to produce.
///
/// # Examples
///
/// ```
/// use delulu_core::{CharacterProfile, ResponseSchema};
///
/// let schema = CharacterProfile::response_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["required"].as_array().unwrap().len(), 5);
/// ```
pub trait ResponseSchema {
    /// The schema handed to the model alongside the prompt.
    fn response_schema() -> Value;
}

fn field(kind: SchemaType, description: &str) -> Value {
    json!({ "type": kind, "description": description, "nullable": false })
}

fn list(description: &str, items: Value) -> Value {
    json!({ "type": SchemaType::Array, "description": description, "items": items })
}

impl ResponseSchema for CharacterProfile {
    fn response_schema() -> Value {
        json!({
            "type": SchemaType::Object,
            "properties": {
                "name": field(SchemaType::String, "name of character"),
                "age": field(SchemaType::Integer, "integer age of character"),
                "personality": list(
                    "list of personality traits of character",
                    json!({
                        "type": SchemaType::String,
                        "description": "personality trait, format should be 1 word 1 emoji"
                    }),
                ),
                "occupation": field(SchemaType::String, "character's job"),
                "gender": field(SchemaType::String, "Male, Female, Non Binary"),
            },
            "required": ["name", "age", "personality", "occupation", "gender"]
        })
    }
}

fn choice_schema() -> Value {
    json!({
        "type": SchemaType::Object,
        "properties": {
            "text": field(SchemaType::String, "choice text"),
            "impact": field(SchemaType::String, "choice impact"),
            "tension_level": field(SchemaType::Integer, "tension level"),
        },
        "required": ["text", "impact", "tension_level"]
    })
}

fn image_schema() -> Value {
    json!({
        "type": SchemaType::Object,
        "properties": {
            "url": field(SchemaType::String, "image URL"),
            "description": field(SchemaType::String, "image description"),
        }
    })
}

fn state_schema() -> Value {
    json!({
        "type": SchemaType::Object,
        "properties": {
            "location": field(SchemaType::String, "current location"),
            "new_location": field(SchemaType::Boolean, "indicates new location"),
            "location_description": field(SchemaType::String, "location description"),
            "active_plot_threads": list(
                "active plot threads",
                json!({ "type": SchemaType::String, "description": "plot thread" }),
            ),
            "unresolved_elements": list(
                "unresolved story elements",
                json!({ "type": SchemaType::String, "description": "unresolved element" }),
            ),
            "story_phase": field(SchemaType::String, "current story phase"),
            "emotional_tone": field(SchemaType::String, "current emotional tone"),
            "current_tension": field(SchemaType::Integer, "current tension level"),
        },
        "required": [
            "location",
            "new_location",
            "location_description",
            "active_plot_threads",
            "unresolved_elements",
            "story_phase",
            "emotional_tone",
            "current_tension"
        ]
    })
}

impl ResponseSchema for StoryResponse {
    fn response_schema() -> Value {
        json!({
            "type": SchemaType::Object,
            "properties": {
                "text": field(SchemaType::String, "story text"),
                "choices": list("available choices", choice_schema()),
                "current_tension": field(SchemaType::Integer, "current tension level"),
                "story_state": state_schema(),
                "story_images": list("story images", image_schema()),
                "story_over": field(SchemaType::Boolean, "indicates if story is over"),
            },
            "required": ["text", "choices", "current_tension", "story_state", "story_over"]
        })
    }
}
