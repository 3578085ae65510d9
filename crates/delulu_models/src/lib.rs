//! Model provider integrations for Delulu.
//!
//! Both clients talk to the Google Generative Language REST API and share
//! one [`GoogleApiConfig`]:
//!
//! - **Gemini** ([`GeminiClient`]) - schema-constrained JSON text generation
//! - **Imagen** ([`ImagenClient`]) - single-image scene generation
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use delulu_core::{CharacterProfile, Input};
//! use delulu_interface::generate_structured;
//! use delulu_models::{GeminiClient, GoogleApiConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GoogleApiConfig::builder().api_key("AIza...").build()?;
//! let client = GeminiClient::new(config, "gemini-2.0-flash")?;
//! let profile: Option<CharacterProfile> = generate_structured(
//!     &client,
//!     vec![Input::Text("Character Name: Ada Lovelace".to_string())],
//! )
//! .await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod api;

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
mod imagen;

#[cfg(feature = "gemini")]
pub use api::{GOOGLE_API_BASE, GoogleApiConfig, GoogleApiConfigBuilder};

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, GenerationConfigBuilder, InlineData, Part, PromptFeedback,
};

#[cfg(feature = "gemini")]
pub use imagen::{
    DEFAULT_ASPECT_RATIO, ImagenClient, OutputOptions, PredictInstance, PredictParameters,
    PredictRequest, PredictResponse, Prediction,
};
