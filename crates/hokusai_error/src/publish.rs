//! Hosted-table publishing error types.

/// Specific error conditions for table record publishing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PublishErrorKind {
    /// Publisher configuration is missing or invalid
    #[display("Invalid publisher configuration: {}", _0)]
    InvalidConfiguration(String),
    /// Failed to obtain an access token
    #[display("Authentication failed: {}", _0)]
    Auth(String),
    /// HTTP transport failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The table service returned a non-zero application code
    #[display("Table API error {}: {}", code, message)]
    Api {
        /// Application-level error code
        code: i64,
        /// Response message (truncated)
        message: String,
    },
    /// Attachment upload failed
    #[display("Attachment upload failed: {}", _0)]
    UploadFailed(String),
}

/// Error type for publishing operations.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The specific error condition
    pub kind: PublishErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
