//! Integration tests for the manifest-driven output driver.

use async_trait::async_trait;
use hokusai_core::PromptRecord;
use hokusai_error::{HokusaiResult, MediaError, MediaErrorKind};
use hokusai_interface::ImageGenerator;
use hokusai_media::generate_note_images;

/// Fails for one page, succeeds for the rest.
struct FlakyGenerator {
    fail_page: String,
}

#[async_trait]
impl ImageGenerator for FlakyGenerator {
    async fn generate(&self, record: &PromptRecord) -> HokusaiResult<Vec<u8>> {
        if record.page() == &self.fail_page {
            Err(MediaError::new(MediaErrorKind::MissingImageData))?
        } else {
            Ok(b"image bytes".to_vec())
        }
    }

    fn provider_name(&self) -> &'static str {
        "flaky"
    }

    fn model_name(&self) -> &str {
        "flaky-v1"
    }
}

#[tokio::test]
async fn failed_page_is_skipped_and_the_rest_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FlakyGenerator {
        fail_page: "1".to_string(),
    };
    let records = vec![
        PromptRecord::new("1", "Cover with title"),
        PromptRecord::new("2", "Key points list"),
    ];

    let written = generate_note_images(&generator, &records, dir.path())
        .await
        .unwrap();
    let names: Vec<_> = written
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, vec!["p2.png"]);
    assert!(!dir.path().join("p1.png").exists());
}

#[tokio::test]
async fn all_pages_failing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FlakyGenerator {
        fail_page: "1".to_string(),
    };
    let records = vec![PromptRecord::new("1", "Cover with title")];

    let err = generate_note_images(&generator, &records, dir.path())
        .await
        .unwrap_err();
    assert!(format!("{}", err).contains("No images generated"));
}
