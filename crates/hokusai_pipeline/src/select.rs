//! Next-note selection.

use hokusai_core::{NoteId, UsageLedger};

/// Pick the first id the ledger has not consumed.
///
/// `all_ids` is the corpus reader's canonical (ascending sorted)
/// enumeration, so re-running with the same ledger and corpus always
/// returns the same id — a partial failure before the ledger update
/// reproduces the same selection on retry.
///
/// Returns `None` when every id is used: the catalog is exhausted and the
/// run should stop successfully with nothing to do.
///
/// # Examples
///
/// ```
/// use hokusai_core::{NoteId, UsageLedger};
/// use hokusai_pipeline::select_next;
///
/// let ids: Vec<NoteId> = ["001", "002"].iter().map(|s| s.parse().unwrap()).collect();
/// let ledger = UsageLedger::default().mark_used(&ids[0]);
/// assert_eq!(select_next(&ledger, &ids), Some(ids[1].clone()));
/// ```
pub fn select_next(ledger: &UsageLedger, all_ids: &[NoteId]) -> Option<NoteId> {
    all_ids.iter().find(|id| !ledger.is_used(id)).cloned()
}
