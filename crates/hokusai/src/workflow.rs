//! Stage orchestration.
//!
//! Each stage is callable on its own (the CLI exposes one subcommand per
//! stage) and [`run_workflow`] chains them for the next unused note. The
//! ledger update is deliberately the last step: a failure anywhere upstream
//! leaves the note eligible for re-selection on the next run.

use hokusai_core::{ExtractedNote, NoteId, PromptRecord, UsageLedger};
use hokusai_error::HokusaiResult;
use hokusai_interface::{ImageGenerator, PublishReceipt, RecordPublisher};
use hokusai_media::{generate_note_images, list_page_images};
use hokusai_pipeline::{
    compile_prompts, extract, images_dir, load_manifest, select_next, write_manifest,
    PipelinePaths,
};
use std::path::PathBuf;
use tracing::info;

/// Select the next unused note id, or `None` when the catalog is exhausted.
///
/// # Errors
///
/// Returns an error if the corpus cannot be scanned or the ledger cannot be
/// read.
pub fn select_next_note(paths: &PipelinePaths) -> HokusaiResult<Option<NoteId>> {
    let all_ids = paths.corpus().list_note_ids()?;
    let ledger = paths.ledger_store().load()?;
    Ok(select_next(&ledger, &all_ids))
}

/// Extract a note and persist its compiled prompt manifest.
///
/// Returns the records and the manifest path.
///
/// # Errors
///
/// Returns an error if the note cannot be found or the manifest cannot be
/// written.
pub fn compile_note_prompts(
    paths: &PipelinePaths,
    id: &NoteId,
) -> HokusaiResult<(Vec<PromptRecord>, PathBuf)> {
    let note = extract(&paths.corpus(), id)?;
    let records = compile_prompts(&note);
    let manifest_path = write_manifest(paths.output_dir(), id, &records)?;
    Ok((records, manifest_path))
}

/// Render a note's manifest into its images directory.
///
/// # Errors
///
/// Returns an error if the manifest is missing or every page fails.
pub async fn render_note_images(
    paths: &PipelinePaths,
    id: &NoteId,
    generator: &dyn ImageGenerator,
) -> HokusaiResult<Vec<PathBuf>> {
    let records = load_manifest(paths.output_dir(), id)?;
    generate_note_images(generator, &records, &images_dir(paths.output_dir(), id)).await
}

/// Push a note's text and generated images to the hosted table.
///
/// # Errors
///
/// Returns an error if extraction or the table write fails.
pub async fn publish_note(
    paths: &PipelinePaths,
    id: &NoteId,
    publisher: &dyn RecordPublisher,
) -> HokusaiResult<PublishReceipt> {
    let note: ExtractedNote = extract(&paths.corpus(), id)?;
    let images = list_page_images(&images_dir(paths.output_dir(), id));
    publisher.publish(&note, &images).await
}

/// Record a note as consumed.
///
/// # Errors
///
/// Returns an error if the ledger cannot be loaded or written.
pub fn mark_note_used(paths: &PipelinePaths, id: &NoteId) -> HokusaiResult<UsageLedger> {
    paths.ledger_store().mark_used(id)
}

/// Run the full pipeline for the next unused note.
///
/// Returns the id that completed, or `None` when every note is used (a
/// clean stop, not an error). Pass `None` as the publisher to skip the
/// hosted-table upload.
///
/// # Errors
///
/// Returns the first stage error; the ledger is only updated after every
/// preceding stage succeeded.
pub async fn run_workflow(
    paths: &PipelinePaths,
    generator: &dyn ImageGenerator,
    publisher: Option<&dyn RecordPublisher>,
) -> HokusaiResult<Option<NoteId>> {
    let Some(id) = select_next_note(paths)? else {
        info!("Catalog exhausted, nothing to do");
        return Ok(None);
    };
    info!(note = %id, "Selected note");

    let (records, manifest_path) = compile_note_prompts(paths, &id)?;
    info!(
        note = %id,
        prompts = records.len(),
        manifest = %manifest_path.display(),
        "Compiled prompts"
    );

    let images = render_note_images(paths, &id, generator).await?;
    info!(note = %id, images = images.len(), "Generated images");

    if let Some(publisher) = publisher {
        let receipt = publish_note(paths, &id, publisher).await?;
        info!(
            note = %id,
            created = *receipt.created(),
            attachments = *receipt.attachment_count(),
            "Published record"
        );
    }

    mark_note_used(paths, &id)?;
    Ok(Some(id))
}
