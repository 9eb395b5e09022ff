//! Trait seams for image generation and record publishing.

use crate::PublishReceipt;
use async_trait::async_trait;
use hokusai_core::{ExtractedNote, PromptRecord};
use hokusai_error::HokusaiResult;
use std::path::PathBuf;

/// Core trait that all image-generation backends must implement.
///
/// Backends are interchangeable: the output driver iterates a prompt
/// manifest and calls whichever implementation configuration selected.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Render one prompt record into image bytes (PNG).
    async fn generate(&self, record: &PromptRecord) -> HokusaiResult<Vec<u8>>;

    /// Provider name (e.g. "allapi", "replicate").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g. "gemini-3-pro-image-preview").
    fn model_name(&self) -> &str;
}

/// Trait for pushing a finished note into a hosted table.
///
/// Implementations authenticate, upload the generated images as
/// attachments, then create or update the record keyed by the note id.
#[async_trait]
pub trait RecordPublisher: Send + Sync {
    /// Publish the note's text fields plus image attachments.
    async fn publish(
        &self,
        note: &ExtractedNote,
        images: &[PathBuf],
    ) -> HokusaiResult<PublishReceipt>;
}
