//! Upload extraction and image validation.

use crate::ApiError;
use axum::extract::Multipart;
use delulu_error::{ServerError, ServerErrorKind, ValidationError, ValidationErrorKind};
use tracing::{debug, instrument};

/// Multipart field carrying the photo.
pub const UPLOAD_FIELD: &str = "file";

/// A decoded and verified upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedImage {
    /// Original bytes, untouched
    pub bytes: Vec<u8>,
    /// MIME type of the detected format
    pub mime: String,
}

/// Check that `bytes` is a non-empty image that fully decodes.
///
/// # Errors
///
/// `EmptyUpload` for zero bytes, `InvalidImage` when the format is unknown
/// or decoding fails.
///
/// # Examples
///
/// ```
/// use delulu_server::decode_and_verify;
///
/// assert!(decode_and_verify(b"").is_err());
/// assert!(decode_and_verify(b"definitely not a picture").is_err());
/// ```
#[instrument(skip(bytes), fields(size = bytes.len()))]
pub fn decode_and_verify(bytes: &[u8]) -> Result<VerifiedImage, ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyUpload));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| ValidationError::new(ValidationErrorKind::InvalidImage(e.to_string())))?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ValidationError::new(ValidationErrorKind::InvalidImage(e.to_string())))?;

    debug!(
        format = ?format,
        width = decoded.width(),
        height = decoded.height(),
        "Upload verified"
    );
    Ok(VerifiedImage {
        bytes: bytes.to_vec(),
        mime: format.to_mime_type().to_string(),
    })
}

/// [`decode_and_verify`] on the blocking pool, so a large upload does not
/// hold up the async workers.
///
/// # Errors
///
/// 400 for anything `decode_and_verify` rejects, 500 if the decoding task dies.
pub async fn verify_upload(bytes: Vec<u8>) -> Result<VerifiedImage, ApiError> {
    let verified = tokio::task::spawn_blocking(move || decode_and_verify(&bytes))
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Internal(format!(
                "image decoding task failed: {}",
                e
            )))
        })??;
    Ok(verified)
}

/// Pull the `file` field out of a multipart body.
///
/// # Errors
///
/// `MissingFile` when no such field exists, `Multipart` when the body is malformed.
pub async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, ValidationError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ValidationError::new(ValidationErrorKind::Multipart(e.body_text())))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| ValidationError::new(ValidationErrorKind::Multipart(e.body_text())))?;
            return Ok(data.to_vec());
        }
    }
    Err(ValidationError::new(ValidationErrorKind::MissingFile))
}
