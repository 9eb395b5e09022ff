//! Error types for the Hokusai publishing pipeline.
//!
//! This crate provides the foundation error types used throughout the Hokusai
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use hokusai_error::{HokusaiResult, CorpusError, CorpusErrorKind};
//!
//! fn scan_notes() -> HokusaiResult<Vec<String>> {
//!     Err(CorpusError::new(CorpusErrorKind::DirectoryMissing(
//!         "data/notes".to_string(),
//!     )))?
//! }
//!
//! match scan_notes() {
//!     Ok(ids) => println!("Found {} notes", ids.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod corpus;
mod error;
mod json;
mod ledger;
mod media;
mod note;
mod publish;

pub use config::ConfigError;
pub use corpus::{CorpusError, CorpusErrorKind};
pub use error::{HokusaiError, HokusaiErrorKind, HokusaiResult};
pub use json::JsonError;
pub use ledger::{LedgerError, LedgerErrorKind};
pub use media::{MediaError, MediaErrorKind};
pub use note::{NoteError, NoteErrorKind};
pub use publish::{PublishError, PublishErrorKind};
