//! Story orchestration for the Delulu story backend.
//!
//! One story request runs as a single sequential pipeline:
//!
//! ```text
//! request -> text model -> StoryState.new_location?
//!                            no  -> no image
//!                            yes -> cache lookup -> hit  -> cached image
//!                                                -> miss -> image model -> cache store
//! ```
//!
//! Text generation failures become a `null` payload; image failures only
//! ever cost the picture, never the segment. Nothing here returns an error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod characters;
mod orchestrator;
pub mod prompt;

pub use characters::CharacterService;
pub use orchestrator::{ImageOutcome, StoryOrchestrator};
