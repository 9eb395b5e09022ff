//! End-to-end workflow tests over a temp corpus with stub collaborators.

use async_trait::async_trait;
use hokusai::{
    run_workflow, ExtractedNote, HokusaiResult, MockGenerator, PipelinePathsBuilder,
    PublishReceipt, RecordPublisher,
};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Records what was published instead of talking to a real table.
#[derive(Default)]
struct StubPublisher {
    published: Mutex<Vec<(String, usize)>>,
}

#[async_trait]
impl RecordPublisher for StubPublisher {
    async fn publish(
        &self,
        note: &ExtractedNote,
        images: &[PathBuf],
    ) -> HokusaiResult<PublishReceipt> {
        self.published
            .lock()
            .unwrap()
            .push((note.id().to_string(), images.len()));
        Ok(PublishReceipt::new(
            Some("rec001".to_string()),
            true,
            images.len(),
        ))
    }
}

fn workspace_with_two_notes() -> (TempDir, hokusai::PipelinePaths) {
    let dir = TempDir::new().unwrap();
    let notes_dir = dir.path().join("notes");
    fs::create_dir_all(&notes_dir).unwrap();
    fs::write(
        notes_dir.join("batch1.md"),
        "## 【Note001】\n\
- **Title A**：Exam Tips\n\
\n\
### Body\n\
Three habits that actually move your score.\n\
\n\
### Image Captions\n\
- P1：Cover with title\n\
\n\
### Topic Tags\n\
```\n\
#exam #study\n\
```\n\
\n\
## 【Note002】\n\
- **Title A**：Interview Prep\n\
\n\
### Body\n\
What panels actually ask.\n\
\n\
### Image Captions\n\
- P1：Interview checklist\n",
    )
    .unwrap();

    let paths = PipelinePathsBuilder::default()
        .notes_dir(notes_dir)
        .ledger_path(dir.path().join("usage_log.json"))
        .output_dir(dir.path().join("output"))
        .build()
        .unwrap();
    (dir, paths)
}

#[tokio::test]
async fn full_runs_consume_notes_in_order_then_stop() {
    let (dir, paths) = workspace_with_two_notes();
    let generator = MockGenerator::default();
    let publisher = StubPublisher::default();

    let first = run_workflow(&paths, &generator, Some(&publisher)).await.unwrap();
    assert_eq!(first.as_ref().map(|id| id.to_string()), Some("001".to_string()));

    // The image file exists and the ledger holds the id.
    assert!(dir.path().join("output/note001_images/p1.png").exists());
    assert!(dir.path().join("output/note001_prompts/prompts.json").exists());
    let ledger_raw = fs::read_to_string(dir.path().join("usage_log.json")).unwrap();
    assert!(ledger_raw.contains("\"001\""));

    let second = run_workflow(&paths, &generator, Some(&publisher)).await.unwrap();
    assert_eq!(second.as_ref().map(|id| id.to_string()), Some("002".to_string()));

    // Exhausted: a clean no-op, not an error.
    let third = run_workflow(&paths, &generator, Some(&publisher)).await.unwrap();
    assert_eq!(third, None);

    let published = publisher.published.lock().unwrap();
    assert_eq!(
        published.as_slice(),
        &[("001".to_string(), 1), ("002".to_string(), 1)]
    );
}

#[tokio::test]
async fn skipping_the_publisher_still_marks_the_note() {
    let (dir, paths) = workspace_with_two_notes();
    let generator = MockGenerator::default();

    let completed = run_workflow(&paths, &generator, None).await.unwrap();
    assert_eq!(
        completed.as_ref().map(|id| id.to_string()),
        Some("001".to_string())
    );
    assert!(dir.path().join("usage_log.json").exists());
}

#[tokio::test]
async fn failed_extraction_leaves_the_ledger_untouched() {
    let (dir, paths) = workspace_with_two_notes();

    // Corrupt the corpus by removing the directory mid-flight.
    fs::remove_dir_all(paths.notes_dir()).unwrap();

    let generator = MockGenerator::default();
    let result = run_workflow(&paths, &generator, None).await;
    assert!(result.is_err());
    assert!(!dir.path().join("usage_log.json").exists());
}
