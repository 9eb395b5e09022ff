//! Ledger persistence.
//!
//! Thin adapter between the pure [`UsageLedger`] value and its flat file.
//! Writes go to a temp file first and are published with an atomic rename,
//! so a crash mid-write can never leave a half-written ledger. Single-writer
//! discipline is assumed (one pipeline run at a time); no locking.

use hokusai_core::{NoteId, UsageLedger};
use hokusai_error::{HokusaiResult, LedgerError, LedgerErrorKind};
use std::path::{Path, PathBuf};

/// File-backed store for the usage ledger.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store over a ledger file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted ledger.
    ///
    /// An absent file yields the default ledger (nothing consumed yet).
    ///
    /// # Errors
    ///
    /// Returns `LedgerError(Corrupt)` when the file exists but cannot be
    /// parsed — history is never silently discarded, the operator decides.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> HokusaiResult<UsageLedger> {
        if !self.path.exists() {
            tracing::debug!("No ledger file yet, starting from default");
            return Ok(UsageLedger::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| LedgerError::new(LedgerErrorKind::Read(e.to_string())))?;

        let ledger = serde_json::from_str(&raw)
            .map_err(|e| LedgerError::new(LedgerErrorKind::Corrupt(e.to_string())))?;
        Ok(ledger)
    }

    /// Persist the ledger atomically (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either write step fails.
    #[tracing::instrument(skip(self, ledger), fields(path = %self.path.display()))]
    pub fn save(&self, ledger: &UsageLedger) -> HokusaiResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::new(LedgerErrorKind::Write(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let json = serde_json::to_string_pretty(ledger)
            .map_err(|e| LedgerError::new(LedgerErrorKind::Serialize(e.to_string())))?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, json).map_err(|e| {
            LedgerError::new(LedgerErrorKind::Write(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            LedgerError::new(LedgerErrorKind::Write(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }

    /// Mark a note as consumed and persist the result.
    ///
    /// Load, pure update, atomic save; idempotent end to end.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be loaded or written.
    pub fn mark_used(&self, id: &NoteId) -> HokusaiResult<UsageLedger> {
        let ledger = self.load()?.mark_used(id);
        self.save(&ledger)?;

        tracing::info!(
            note = %id,
            used = ledger.used_count(),
            total = *ledger.total_available(),
            "Marked note as used"
        );
        Ok(ledger)
    }
}
