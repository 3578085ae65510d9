//! Core data types for the Delulu story backend.
//!
//! This crate holds the request and response shapes shared by the generation
//! clients, the story orchestrator and the HTTP surface, along with the
//! response schemas handed to the text model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod envelope;
mod input;
mod media;
mod request;
mod schema;
mod story;

pub use character::{Character, CharacterNameRequest, CharacterProfile, CharacterQuery};
pub use envelope::Payload;
pub use input::Input;
pub use media::MediaSource;
pub use request::{
    GenerationRequest, StoryContext, StructuredRequest, StructuredRequestBuilder,
};
pub use schema::{ResponseSchema, SchemaType};
pub use story::{StoryChoice, StoryConfig, StoryImage, StoryResponse, StoryState};
