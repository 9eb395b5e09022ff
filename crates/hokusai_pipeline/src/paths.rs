//! Filesystem layout for a pipeline run.

use crate::{LedgerStore, NoteCorpus};
use std::path::PathBuf;

/// Where a run reads its corpus and writes its artifacts.
///
/// Defaults mirror the conventional layout: notes under `data/notes`, the
/// ledger at `data/usage_log.json`, artifacts under `output/`.
///
/// # Examples
///
/// ```
/// use hokusai_pipeline::PipelinePathsBuilder;
///
/// let paths = PipelinePathsBuilder::default()
///     .notes_dir("fixtures/notes")
///     .build()
///     .unwrap();
/// assert_eq!(paths.ledger_path().to_str(), Some("data/usage_log.json"));
/// ```
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PipelinePaths {
    /// Directory of note documents (read-only input)
    #[builder(default = "PathBuf::from(\"data/notes\")")]
    notes_dir: PathBuf,
    /// The usage ledger file
    #[builder(default = "PathBuf::from(\"data/usage_log.json\")")]
    ledger_path: PathBuf,
    /// Root for prompt manifests and generated images
    #[builder(default = "PathBuf::from(\"output\")")]
    output_dir: PathBuf,
}

impl Default for PipelinePaths {
    fn default() -> Self {
        PipelinePathsBuilder::default()
            .build()
            .expect("all fields have defaults")
    }
}

impl PipelinePaths {
    /// The corpus over this layout's note directory.
    pub fn corpus(&self) -> NoteCorpus {
        NoteCorpus::new(&self.notes_dir)
    }

    /// The ledger store over this layout's ledger file.
    pub fn ledger_store(&self) -> LedgerStore {
        LedgerStore::new(&self.ledger_path)
    }
}
