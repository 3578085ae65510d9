use super::dto::{
    OutputOptions, PredictInstance, PredictParameters, PredictRequest, PredictResponse,
};
use crate::GoogleApiConfig;
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use delulu_error::{GenerationError, GenerationErrorKind, GenerationResult};
use delulu_interface::{GeneratedImage, ImageGenerator};
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Portrait ratio used for scene cards.
pub const DEFAULT_ASPECT_RATIO: &str = "3:4";

const OUTPUT_MIME_TYPE: &str = "image/jpeg";

/// Imagen client that renders one image per prompt.
#[derive(Debug, Clone)]
pub struct ImagenClient {
    client: Client,
    config: GoogleApiConfig,
    model: String,
    aspect_ratio: String,
}

impl ImagenClient {
    /// Creates a new Imagen client using [`DEFAULT_ASPECT_RATIO`].
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the key is empty.
    pub fn new(config: GoogleApiConfig, model: impl Into<String>) -> GenerationResult<Self> {
        let model = model.into();
        debug!(model = %model, "Creating new Imagen client");
        Ok(Self {
            client: config.http_client()?,
            config,
            model,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
        })
    }

    /// Use a different aspect ratio (e.g., "1:1", "16:9").
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    /// Configured aspect ratio.
    pub fn aspect_ratio(&self) -> &str {
        &self.aspect_ratio
    }

    fn build_request(&self, prompt: &str) -> PredictRequest {
        PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: self.aspect_ratio.clone(),
                include_rai_reason: true,
                output_options: OutputOptions {
                    mime_type: OUTPUT_MIME_TYPE.to_string(),
                },
            },
        }
    }
}

/// Pull the single image out of a predict response.
fn into_image(response: PredictResponse) -> GenerationResult<GeneratedImage> {
    let Some(prediction) = response.predictions.into_iter().next() else {
        return Err(GenerationError::new(GenerationErrorKind::Filtered(
            "no image returned".to_string(),
        )));
    };

    if let Some(reason) = prediction.rai_filtered_reason {
        return Err(GenerationError::new(GenerationErrorKind::Filtered(reason)));
    }

    let encoded = match prediction.bytes_base64_encoded {
        Some(encoded) if !encoded.is_empty() => encoded,
        _ => {
            return Err(GenerationError::new(GenerationErrorKind::Filtered(
                "image bytes missing".to_string(),
            )));
        }
    };

    let bytes = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedPayload(format!(
            "image bytes are not base64: {}",
            e
        )))
    })?;

    let mime_type = prediction
        .mime_type
        .unwrap_or_else(|| OUTPUT_MIME_TYPE.to_string());
    Ok(GeneratedImage::new(bytes, mime_type))
}

#[async_trait]
impl ImageGenerator for ImagenClient {
    #[instrument(
        skip(self, prompt),
        fields(model = %self.model, aspect_ratio = %self.aspect_ratio, prompt_len = prompt.len())
    )]
    async fn generate_image(&self, prompt: &str) -> GenerationResult<GeneratedImage> {
        let body = self.build_request(prompt);
        debug!("Sending predict request");

        let response = self
            .client
            .post(self.config.model_endpoint(&self.model, "predict"))
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.config.send_error(e))?;

        let response: PredictResponse = self.config.read_json(response).await?;
        let image = into_image(response).inspect_err(|e| {
            if e.kind.is_filtered() {
                warn!(reason = %e.kind, "Imagen produced no usable image");
            }
        })?;

        debug!(size = image.bytes().len(), mime_type = %image.mime_type(), "Received image");
        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        "imagen"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
