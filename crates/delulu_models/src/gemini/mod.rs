//! Google Gemini REST client.
//!
//! Sends one user turn to `models/{model}:generateContent` with
//! `responseMimeType: application/json` and the caller's response schema,
//! and returns the answer text untouched.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GenerationConfigBuilder, InlineData, Part, PromptFeedback,
};
