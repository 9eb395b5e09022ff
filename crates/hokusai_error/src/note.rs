//! Note lookup and parsing error types.

/// Specific error conditions for note extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NoteErrorKind {
    /// No document in the corpus contains the note's header marker
    #[display("Note {} not found in any document", _0)]
    NotFound(String),
    /// The identifier is not a fixed-width note id
    #[display("Invalid note id '{}': expected exactly 3 digits", _0)]
    InvalidId(String),
}

/// Error type for note extraction.
///
/// Missing sub-fields inside a located section are never errors — they
/// degrade to defaults. Only the conditions above are surfaced.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Note Error: {} at line {} in {}", kind, line, file)]
pub struct NoteError {
    /// The specific error condition
    pub kind: NoteErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NoteError {
    /// Create a new NoteError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NoteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
