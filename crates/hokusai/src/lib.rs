//! Hokusai - automated note-to-post publishing
//!
//! Hokusai turns a catalog of authored markdown "notes" into published
//! social-media posts with generated illustrations. Each run selects the
//! next unused note, extracts its structured fields, compiles image
//! prompts, drives an image-generation backend, pushes text and images
//! into a hosted table, and finally records the note as used.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hokusai::{run_workflow, FeishuClient, MockGenerator, PipelinePaths};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let paths = PipelinePaths::default();
//!     let generator = MockGenerator::default();
//!     let publisher = FeishuClient::from_env()?;
//!
//!     match run_workflow(&paths, &generator, Some(&publisher)).await? {
//!         Some(id) => println!("Published note {}", id),
//!         None => println!("Catalog exhausted, nothing to do"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Hokusai is organized as a workspace with focused crates:
//!
//! - `hokusai_error` - Error types
//! - `hokusai_core` - Core data types (NoteId, UsageLedger, PromptRecord)
//! - `hokusai_interface` - ImageGenerator and RecordPublisher traits
//! - `hokusai_pipeline` - Selection, extraction, and prompt compilation
//! - `hokusai_media` - Image-generation backends
//! - `hokusai_publish` - Hosted-table upload client
//!
//! This crate (`hokusai`) re-exports everything for convenience and adds
//! the stage orchestration used by the CLI.

// Re-export the workspace crates
pub use hokusai_core::*;
pub use hokusai_error::*;
pub use hokusai_interface::*;
pub use hokusai_media::*;
pub use hokusai_pipeline::*;
pub use hokusai_publish::*;

mod workflow;

pub use workflow::{
    compile_note_prompts, mark_note_used, publish_note, render_note_images, run_workflow,
    select_next_note,
};
