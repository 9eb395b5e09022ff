//! Top-level error wrapper types.

use crate::{
    ConfigError, CorpusError, JsonError, LedgerError, MediaError, NoteError, PublishError,
};

/// The foundation error enum. Each pipeline domain routes its error type
/// through a dedicated variant.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiError, LedgerError, LedgerErrorKind};
///
/// let ledger_err = LedgerError::new(LedgerErrorKind::Corrupt("bad json".into()));
/// let err: HokusaiError = ledger_err.into();
/// assert!(format!("{}", err).contains("Ledger Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HokusaiErrorKind {
    /// Note corpus error
    #[from(CorpusError)]
    Corpus(CorpusError),
    /// Note lookup/parsing error
    #[from(NoteError)]
    Note(NoteError),
    /// Usage ledger error
    #[from(LedgerError)]
    Ledger(LedgerError),
    /// Image generation error
    #[from(MediaError)]
    Media(MediaError),
    /// Table publishing error
    #[from(PublishError)]
    Publish(PublishError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Hokusai error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, ConfigError};
///
/// fn might_fail() -> HokusaiResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hokusai Error: {}", _0)]
pub struct HokusaiError(Box<HokusaiErrorKind>);

impl HokusaiError {
    /// Create a new error from a kind.
    pub fn new(kind: HokusaiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HokusaiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HokusaiErrorKind
impl<T> From<T> for HokusaiError
where
    T: Into<HokusaiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hokusai operations.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, JsonError};
///
/// fn parse_manifest() -> HokusaiResult<String> {
///     Err(JsonError::new("unexpected end of input"))?
/// }
/// ```
pub type HokusaiResult<T> = std::result::Result<T, HokusaiError>;
