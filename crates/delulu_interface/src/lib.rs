//! Trait definitions for the Delulu story backend.
//!
//! The orchestrator only ever talks to these traits, so any provider (or a
//! test fake) can stand in for the real Gemini and Imagen clients.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod structured;
mod traits;

pub use delulu_storage::{CacheKey, ImageCache};
pub use extraction::extract_json;
pub use structured::generate_structured;
pub use traits::{GeneratedImage, ImageGenerator, TextGenerator};
