//! Trait definitions for Hokusai's external collaborators.
//!
//! The pipeline core produces inputs (prompt records, extracted notes) and
//! hands them to collaborators specified only at these seams: an image
//! generator and a table record publisher. Concrete backends live in
//! `hokusai_media` and `hokusai_publish`; the core never depends on one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImageGenerator, RecordPublisher};
pub use types::PublishReceipt;
