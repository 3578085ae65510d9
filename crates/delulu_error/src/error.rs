//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, JsonError, ServerError, StorageError, ValidationError,
};

/// Every error the workspace can produce.
///
/// # Examples
///
/// ```
/// use delulu_error::{DeluluError, JsonError};
///
/// let json_err = JsonError::new("expected value at line 1");
/// let err: DeluluError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DeluluErrorKind {
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text or image generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Image cache error
    #[from(StorageError)]
    Storage(StorageError),
    /// Rejected upload
    #[from(ValidationError)]
    Validation(ValidationError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Delulu error with kind discrimination.
///
/// # Examples
///
/// ```
/// use delulu_error::{ConfigError, DeluluErrorKind, DeluluResult};
///
/// fn might_fail() -> DeluluResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), DeluluErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Delulu Error: {}", _0)]
pub struct DeluluError(Box<DeluluErrorKind>);

impl DeluluError {
    /// Create a new error from a kind.
    pub fn new(kind: DeluluErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DeluluErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to DeluluErrorKind
impl<T> From<T> for DeluluError
where
    T: Into<DeluluErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Delulu operations.
pub type DeluluResult<T> = std::result::Result<T, DeluluError>;
