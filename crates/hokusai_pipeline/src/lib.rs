//! Note selection, extraction, and prompt compilation.
//!
//! This crate is the pipeline core: it decides which note runs next and
//! turns that note's markdown section into the inputs the external
//! collaborators consume.
//!
//! - [`NoteCorpus`] enumerates note ids across a directory of documents in
//!   deterministic order.
//! - [`select_next`] picks the first id the [`LedgerStore`]'s ledger has not
//!   consumed; `None` means the catalog is exhausted (a clean stop, not an
//!   error).
//! - [`extract`] slices one note's section out of whichever document holds
//!   it, bounded by the next note header, and pulls out title, body, tags,
//!   and per-page captions with absence-tolerant sub-patterns.
//! - [`compile_prompts`] maps captions to ready-to-send generation requests.
//! - [`write_manifest`]/[`load_manifest`] persist the compiled prompts for
//!   the standalone image stage.
//!
//! Everything here is synchronous and single-pass; the only writable state
//! is the ledger file, replaced atomically on every update.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod corpus;
mod extract;
mod ledger;
mod manifest;
mod paths;
mod prompt;
mod select;

pub use corpus::NoteCorpus;
pub use extract::{extract, header_marker, locate_section};
pub use ledger::LedgerStore;
pub use manifest::{images_dir, load_manifest, prompts_dir, write_manifest};
pub use paths::{PipelinePaths, PipelinePathsBuilder};
pub use prompt::compile_prompts;
pub use select::select_next;
