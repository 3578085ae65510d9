//! HTTP surface for the Delulu story backend.
//!
//! Routes:
//!
//! - `POST /generate-story-segment` - `{prompt}` or a story context, answers `{response}`
//! - `POST /generate-character-details-name` - `{name}`, answers `{response}`
//! - `POST /generate-character-details-image` - multipart `file`, answers `{response}`
//! - `GET /health` - configured models and cache backend
//! - `GET /cache/...` - cached images, when the filesystem backend is active
//!
//! A `null` response means "try again". Bad uploads are 400 and internal
//! faults are 500, both with a `{detail}` body.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bootstrap;
mod config;
mod response;
mod routes;
mod server;
mod state;
mod upload;

pub use bootstrap::{build_cache, build_state};
pub use config::{CacheBackend, CacheSettings, ConfigFile, DeluluConfig, ModelSettings, ServerSettings};
pub use response::{ApiError, ErrorBody, INVALID_IMAGE_DETAIL, panic_response};
pub use routes::{HealthReport, create_router};
pub use server::{serve, serve_with_state};
pub use state::{AppState, ServiceInfo};
pub use upload::{UPLOAD_FIELD, VerifiedImage, decode_and_verify, read_upload, verify_upload};
