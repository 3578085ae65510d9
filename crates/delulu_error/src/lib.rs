//! Error types for the Delulu story backend.
//!
//! # Error Hierarchy
//!
//! Component errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` to capture the location automatically
//!
//! Every component error converts into [`DeluluError`], so `?` works across crates.
//!
//! # Examples
//!
//! ```
//! use delulu_error::{DeluluResult, GenerationError, GenerationErrorKind};
//!
//! fn generate() -> DeluluResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::EmptyResponse))?
//! }
//!
//! match generate() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod json;
mod server;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{DeluluError, DeluluErrorKind, DeluluResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use json::JsonError;
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
pub use validation::{ValidationError, ValidationErrorKind};
