//! Image generation backends for Hokusai.
//!
//! The pipeline core hands a prompt manifest to the [`generate_note_images`]
//! driver, which renders each record through whichever [`ImageGenerator`]
//! implementation configuration selected and writes the results into the
//! note's image directory. Backends are interchangeable behind the trait:
//!
//! - [`AllApiClient`] — Gemini-style `generateContent` endpoint with inline
//!   base64 image payloads
//! - [`ReplicateClient`] — prediction API with synchronous wait
//! - [`MockGenerator`] — deterministic bytes for tests
//!
//! [`ImageGenerator`]: hokusai_interface::ImageGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allapi;
mod backend;
mod dto;
mod mock;
mod output;
mod replicate;

pub use allapi::AllApiClient;
pub use backend::{generator_from_env, BackendKind};
pub use mock::MockGenerator;
pub use output::{generate_note_images, list_page_images, write_page_image, PAGE_PACING};
pub use replicate::ReplicateClient;
