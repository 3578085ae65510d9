//! Errors raised by the text and image generation clients.

/// Generation error conditions.
///
/// The orchestrator treats every kind as recoverable: a failed text generation
/// becomes a null payload and a failed image generation becomes an empty image list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The provider answered without any content
    #[display("Model returned an empty response")]
    EmptyResponse,
    /// The provider answered with content that does not match the requested schema
    #[display("Model returned a malformed payload: {}", _0)]
    MalformedPayload(String),
    /// The provider's safety system withheld the content
    #[display("Content filtered by provider: {}", _0)]
    Filtered(String),
    /// No API key configured for the selected billing mode
    #[display("No API key configured for {} mode", _0)]
    MissingApiKey(String),
    /// The request could not be sent or the response could not be read
    #[display("Generation request failed: {}", _0)]
    Request(String),
    /// Non-success HTTP status from the provider
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The call exceeded its deadline
    #[display("Generation timed out after {}s", _0)]
    Timeout(u64),
}

impl GenerationErrorKind {
    /// True when the provider refused to emit content for the prompt.
    pub fn is_filtered(&self) -> bool {
        matches!(self, GenerationErrorKind::Filtered(_))
    }

    /// True when the call ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GenerationErrorKind::Timeout(_))
    }

    /// True when retrying cannot help because the deployment's credentials are wrong.
    ///
    /// # Examples
    ///
    /// ```
    /// use delulu_error::GenerationErrorKind;
    ///
    /// let denied = GenerationErrorKind::Http { status_code: 403, message: "denied".into() };
    /// assert!(denied.is_credential_fault());
    /// assert!(!GenerationErrorKind::EmptyResponse.is_credential_fault());
    /// ```
    pub fn is_credential_fault(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::MissingApiKey(_)
                | GenerationErrorKind::Http {
                    status_code: 401 | 403,
                    ..
                }
        )
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use delulu_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Filtered("people".to_string()));
/// assert!(err.kind.is_filtered());
/// assert!(format!("{}", err).contains("filtered"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for generation calls.
pub type GenerationResult<T> = Result<T, GenerationError>;
