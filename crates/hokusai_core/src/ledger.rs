//! The usage ledger value type.

use crate::NoteId;
use chrono::{DateTime, Utc};

fn default_total_available() -> u32 {
    100
}

/// Persistent record of which notes have completed the full pipeline.
///
/// This is a pure value: `mark_used` returns the updated ledger and performs
/// no I/O. Persistence (atomic read/replace) lives in the pipeline's store
/// adapter, keeping the update logic testable without a filesystem.
///
/// # Examples
///
/// ```
/// use hokusai_core::{NoteId, UsageLedger};
///
/// let id: NoteId = "001".parse().unwrap();
/// let ledger = UsageLedger::default().mark_used(&id);
/// assert!(ledger.is_used(&id));
/// assert_eq!(ledger.used_notes().len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, derive_getters::Getters,
)]
pub struct UsageLedger {
    /// Consumed note ids, kept canonically sorted
    #[serde(default)]
    used_notes: Vec<String>,
    /// Size of the authored catalog
    #[serde(default = "default_total_available")]
    total_available: u32,
    /// When the ledger last changed; absent until the first mark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
}

impl Default for UsageLedger {
    fn default() -> Self {
        Self {
            used_notes: Vec::new(),
            total_available: default_total_available(),
            last_updated: None,
        }
    }
}

impl UsageLedger {
    /// Whether a note has already completed the pipeline.
    pub fn is_used(&self, id: &NoteId) -> bool {
        self.used_notes.iter().any(|used| used == id.as_str())
    }

    /// Record a note as consumed.
    ///
    /// Idempotent: marking an already-used note changes nothing but the
    /// timestamp. The id list is re-sorted canonically on every call
    /// (lexicographic, which equals numeric order for fixed-width ids).
    #[must_use]
    pub fn mark_used(mut self, id: &NoteId) -> Self {
        if !self.is_used(id) {
            self.used_notes.push(id.as_str().to_string());
            self.used_notes.sort();
        }
        self.last_updated = Some(Utc::now());
        self
    }

    /// Number of consumed notes.
    pub fn used_count(&self) -> usize {
        self.used_notes.len()
    }
}
