//! Image generation error types.

/// Specific error conditions for image generation backends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaErrorKind {
    /// Backend configuration is missing or invalid (API key, base URL)
    #[display("Invalid backend configuration: {}", _0)]
    InvalidConfiguration(String),
    /// HTTP transport failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The provider returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        message: String,
    },
    /// The provider response carried no inline image payload
    #[display("No image data in provider response")]
    MissingImageData,
    /// Inline image payload could not be decoded
    #[display("Failed to decode image payload: {}", _0)]
    Decode(String),
    /// Failed to write a generated image to disk
    #[display("Failed to write image file: {}", _0)]
    FileWrite(String),
    /// Every page in the manifest failed to generate
    #[display("No images generated ({} pages attempted)", _0)]
    NoImagesGenerated(usize),
}

/// Error type for image generation.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The specific error condition
    pub kind: MediaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl MediaError {
    /// Create a new MediaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
