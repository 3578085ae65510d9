//! Wire types for `models/{model}:predict`.

use serde::{Deserialize, Serialize};

/// One prompt to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictInstance {
    /// Image prompt
    pub prompt: String,
}

/// Encoding of the returned image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Requested MIME type
    pub mime_type: String,
}

/// Rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images, always 1 here
    pub sample_count: u32,
    /// Aspect ratio, e.g. "3:4"
    pub aspect_ratio: String,
    /// Report the filter reason instead of silently dropping images
    pub include_rai_reason: bool,
    /// Output encoding
    pub output_options: OutputOptions,
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Prompts
    pub instances: Vec<PredictInstance>,
    /// Parameters
    pub parameters: PredictParameters,
}

/// One generated image, or the reason it was withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64 image bytes
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the bytes
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Safety filter verdict, set when the image was withheld
    #[serde(default)]
    pub rai_filtered_reason: Option<String>,
}

/// Response body. All images filtered comes back as an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PredictResponse {
    /// Generated images
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}
