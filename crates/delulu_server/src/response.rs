//! Error responses.

use axum::{
    Json,
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use delulu_error::{ServerError, ServerErrorKind, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::{error, warn};

/// Detail shown for any upload that is not a usable image.
pub const INVALID_IMAGE_DETAIL: &str = "Invalid image format";

/// `{"detail": "..."}` error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason
    pub detail: String,
}

/// An error that ends a request with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// 400 with `detail`.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    /// 500 with `detail`.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        warn!(error = %err, "Rejected upload");
        match err.kind {
            ValidationErrorKind::MissingFile | ValidationErrorKind::Multipart(_) => {
                Self::bad_request(err.kind.to_string())
            }
            ValidationErrorKind::EmptyUpload | ValidationErrorKind::InvalidImage(_) => {
                Self::bad_request(INVALID_IMAGE_DETAIL)
            }
        }
    }
}

impl From<ServerError> for ApiError {
    fn from(err: ServerError) -> Self {
        error!(error = %err, "Internal fault");
        Self::internal(err.kind.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected JSON body");
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        warn!(error = %rejection.body_text(), "Request is not multipart");
        Self::from(ValidationError::new(ValidationErrorKind::MissingFile))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

/// Turn a handler panic into a 500 `{detail}` response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };
    ApiError::from(ServerError::new(ServerErrorKind::Internal(message))).into_response()
}
