//! Note corpus error types.

/// Specific error conditions for corpus scanning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CorpusErrorKind {
    /// The note directory does not exist
    #[display("Note directory missing: {}", _0)]
    DirectoryMissing(String),
    /// Failed to read a document in the note directory
    #[display("Failed to read note document: {}", _0)]
    FileRead(String),
}

/// Error type for corpus operations.
///
/// # Examples
///
/// ```
/// use hokusai_error::{CorpusError, CorpusErrorKind};
///
/// let err = CorpusError::new(CorpusErrorKind::DirectoryMissing("data/notes".into()));
/// assert!(format!("{}", err).contains("data/notes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Corpus Error: {} at line {} in {}", kind, line, file)]
pub struct CorpusError {
    /// The specific error condition
    pub kind: CorpusErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CorpusError {
    /// Create a new CorpusError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CorpusErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
