//! Shared settings and plumbing for the Google Generative Language API.

use delulu_error::{GenerationError, GenerationErrorKind, GenerationResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::error;

/// Default API endpoint.
pub const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Credentials and limits for the Generative Language API.
///
/// # Examples
///
/// ```
/// use delulu_models::GoogleApiConfig;
///
/// let config = GoogleApiConfig::builder().api_key("test-key").build().unwrap();
/// assert_eq!(config.api_base(), "https://generativelanguage.googleapis.com");
/// assert_eq!(*config.timeout_secs(), 90);
/// ```
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GoogleApiConfig {
    /// API key sent as `x-goog-api-key`
    api_key: String,
    /// API base URL
    #[builder(default = "GOOGLE_API_BASE.to_string()")]
    api_base: String,
    /// Per-call timeout
    #[builder(default = "90")]
    timeout_secs: u64,
}

impl GoogleApiConfig {
    /// Creates a new config builder.
    pub fn builder() -> GoogleApiConfigBuilder {
        GoogleApiConfigBuilder::default()
    }

    /// `{api_base}/v1beta/models/{model}:{method}`.
    pub(crate) fn model_endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}",
            self.api_base.trim_end_matches('/'),
            model,
            method
        )
    }

    /// HTTP client with this config's timeout.
    pub(crate) fn http_client(&self) -> GenerationResult<Client> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::MissingApiKey(
                "configured".to_string(),
            )));
        }

        Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Request(e.to_string())))
    }

    /// Map a transport failure onto the generation taxonomy.
    pub(crate) fn send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            error!(timeout_secs = self.timeout_secs, "Request timed out");
            GenerationError::new(GenerationErrorKind::Timeout(self.timeout_secs))
        } else {
            error!(error = ?e, "Failed to send request");
            GenerationError::new(GenerationErrorKind::Request(e.to_string()))
        }
    }

    /// Check the status and decode the JSON body.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> GenerationResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Http {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::new(GenerationErrorKind::Timeout(self.timeout_secs))
            } else {
                error!(error = ?e, "Failed to parse API response");
                GenerationError::new(GenerationErrorKind::MalformedPayload(format!(
                    "Failed to parse response: {}",
                    e
                )))
            }
        })
    }
}
