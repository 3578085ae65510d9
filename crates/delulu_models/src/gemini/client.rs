use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
use crate::GoogleApiConfig;
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use delulu_core::{Input, MediaSource, StructuredRequest};
use delulu_error::{GenerationError, GenerationErrorKind, GenerationResult};
use delulu_interface::TextGenerator;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Gemini text client for schema-constrained JSON answers.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GoogleApiConfig,
    model: String,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `config` - API key, endpoint and timeout
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash")
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the key is empty.
    pub fn new(config: GoogleApiConfig, model: impl Into<String>) -> GenerationResult<Self> {
        let model = model.into();
        debug!(model = %model, "Creating new Gemini client");
        Ok(Self {
            client: config.http_client()?,
            config,
            model,
        })
    }

    /// Converts a structured request into the wire format.
    fn convert_request(request: &StructuredRequest) -> GenerationResult<GenerateContentRequest> {
        let parts = request
            .parts()
            .iter()
            .map(|input| match input {
                Input::Text(text) => Part::Text { text: text.clone() },
                Input::Image { mime, source } => Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime.clone().unwrap_or_else(|| "image/jpeg".to_string()),
                        data: match source {
                            MediaSource::Base64(data) => data.clone(),
                            MediaSource::Binary(bytes) => STANDARD.encode(bytes),
                        },
                    },
                },
            })
            .collect();

        let generation_config = GenerationConfig::builder()
            .response_schema(request.schema().clone())
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Request(e.to_string())))?;

        Ok(GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.model, prompt_len = request.text_len()))]
    async fn generate_json(&self, request: &StructuredRequest) -> GenerationResult<String> {
        let body = Self::convert_request(request)?;
        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.config.model_endpoint(&self.model, "generateContent"))
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.config.send_error(e))?;

        let response: GenerateContentResponse = self.config.read_json(response).await?;

        if let Some(text) = response.text() {
            debug!(response_len = text.len(), "Received Gemini answer");
            return Ok(text);
        }

        if let Some(reason) = response.block_reason() {
            warn!(reason, "Gemini withheld the answer");
            return Err(GenerationError::new(GenerationErrorKind::Filtered(
                reason.to_string(),
            )));
        }

        warn!("Gemini returned no text");
        Err(GenerationError::new(GenerationErrorKind::EmptyResponse))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
