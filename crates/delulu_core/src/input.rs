//! Prompt parts sent to the text model.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// One part of a multimodal prompt.
///
/// # Examples
///
/// ```
/// use delulu_core::{Input, MediaSource};
///
/// let text = Input::Text("Character Name: Sherlock Holmes".to_string());
///
/// let photo = Input::Image {
///     mime: Some("image/jpeg".to_string()),
///     source: MediaSource::Binary(vec![0xFF, 0xD8, 0xFF]),
/// };
/// assert!(!text.is_media());
/// assert!(photo.is_media());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, GIF).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },
}

impl Input {
    /// True for non-text parts.
    pub fn is_media(&self) -> bool {
        matches!(self, Input::Image { .. })
    }
}
