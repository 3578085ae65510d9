//! Validation errors for user uploads.

/// Reasons an upload is rejected before any generation call is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The multipart body had no `file` field
    #[display("No file uploaded")]
    MissingFile,
    /// The uploaded file was zero bytes
    #[display("Empty image data")]
    EmptyUpload,
    /// The uploaded bytes are not a decodable image
    #[display("Invalid image format: {}", _0)]
    InvalidImage(String),
    /// The multipart body itself could not be read
    #[display("Malformed multipart body: {}", _0)]
    Multipart(String),
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
