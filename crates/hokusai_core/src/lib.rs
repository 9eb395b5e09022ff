//! Core data types for the Hokusai publishing pipeline.
//!
//! This crate provides the foundation data types shared by the pipeline core
//! and its external collaborators: note identifiers, extracted note content,
//! compiled prompt records, and the usage ledger value type.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ledger;
mod note;
mod prompt;

pub use ledger::UsageLedger;
pub use note::{ExtractedNote, NoteId, PageCaption};
pub use prompt::{DOMAIN_QUALIFIER, NEGATIVE_PROMPT, PromptRecord, STYLE_PREAMBLE};
