//! Delulu - interactive story backend.
//!
//! Turns a player's characters and story settings into generated story
//! segments, each optionally illustrated with a scene image that is cached
//! under a key derived from the scene's description.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use delulu::{DeluluConfig, GenerationRequest, build_state};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeluluConfig::load(None)?;
//!     let state = build_state(&config)?;
//!
//!     let request = GenerationRequest::Prompt {
//!         prompt: "Begin a ghost story in a lighthouse.".to_string(),
//!     };
//!     let story = state.orchestrator().generate_segment(&request).await;
//!     println!("{:?}", story.map(|s| s.text));
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export tracing spans through OpenTelemetry (stdout exporter)
//!
//! # Architecture
//!
//! - `delulu_error` - error types
//! - `delulu_core` - data model and response schemas
//! - `delulu_interface` - generator traits and structured generation
//! - `delulu_storage` - cache keys and image cache backends
//! - `delulu_models` - Gemini and Imagen clients
//! - `delulu_narrative` - prompts, story orchestrator, character lookups
//! - `delulu_server` - HTTP routes, configuration, bootstrap
//!
//! This crate re-exports everything for convenience.

pub mod observability;

pub use delulu_core::*;
pub use delulu_error::*;
pub use delulu_interface::*;
pub use delulu_models::*;
pub use delulu_narrative::{CharacterService, ImageOutcome, StoryOrchestrator, prompt};
pub use delulu_server::{
    ApiError, AppState, CacheBackend, CacheSettings, ConfigFile, DeluluConfig, HealthReport,
    ModelSettings, ServerSettings, ServiceInfo, build_cache, build_state, create_router,
    decode_and_verify, serve,
};
pub use delulu_storage::{
    FileSystemImageCache, GcsImageCache, GcsOptions, IMAGE_CONTENT_TYPE, InMemoryImageCache,
    derive_key,
};
pub use observability::{ObservabilityConfig, ObservabilityGuard, init_observability};
