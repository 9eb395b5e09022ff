//! Usage ledger error types.

/// Specific error conditions for ledger persistence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LedgerErrorKind {
    /// The ledger file exists but cannot be parsed; history must not be
    /// silently discarded, so this propagates to the operator
    #[display("Ledger file is corrupt: {}", _0)]
    Corrupt(String),
    /// Failed to read the ledger file
    #[display("Failed to read ledger: {}", _0)]
    Read(String),
    /// Failed to write or publish the ledger file
    #[display("Failed to write ledger: {}", _0)]
    Write(String),
    /// Failed to serialize the ledger
    #[display("Failed to serialize ledger: {}", _0)]
    Serialize(String),
}

/// Error type for ledger operations.
///
/// # Examples
///
/// ```
/// use hokusai_error::{LedgerError, LedgerErrorKind};
///
/// let err = LedgerError::new(LedgerErrorKind::Corrupt("not json".into()));
/// assert!(format!("{}", err).contains("corrupt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ledger Error: {} at line {} in {}", kind, line, file)]
pub struct LedgerError {
    /// The specific error condition
    pub kind: LedgerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LedgerError {
    /// Create a new LedgerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LedgerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
