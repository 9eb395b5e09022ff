//! Manifest-driven image output.
//!
//! Iterates a prompt manifest in order, renders each record through the
//! configured backend, and writes one `p{page}.png` per success into the
//! note's image directory. A failed page is logged and skipped; the stage
//! fails only when every page failed.

use hokusai_core::PromptRecord;
use hokusai_error::{HokusaiResult, MediaError, MediaErrorKind};
use hokusai_interface::ImageGenerator;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Pause between provider calls.
pub const PAGE_PACING: Duration = Duration::from_secs(2);

/// Render every record of a manifest into the images directory.
///
/// Returns the paths written, in page order.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, or when no page at
/// all could be generated.
#[tracing::instrument(skip(generator, records), fields(
    count = records.len(),
    provider = generator.provider_name(),
    model = generator.model_name(),
))]
pub async fn generate_note_images(
    generator: &dyn ImageGenerator,
    records: &[PromptRecord],
    images_dir: &Path,
) -> HokusaiResult<Vec<PathBuf>> {
    if records.is_empty() {
        info!("Manifest is empty, nothing to generate");
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(images_dir).map_err(|e| {
        MediaError::new(MediaErrorKind::FileWrite(format!(
            "{}: {}",
            images_dir.display(),
            e
        )))
    })?;

    let mut written = Vec::new();
    for (index, record) in records.iter().enumerate() {
        info!(page = %record.page(), "Generating image");

        match generator.generate(record).await {
            Ok(bytes) => {
                let path = write_page_image(images_dir, record.page(), &bytes)?;
                info!(path = %path.display(), size = bytes.len(), "Saved image");
                written.push(path);
            }
            Err(e) => {
                warn!(page = %record.page(), error = %e, "Generation failed, skipping page");
            }
        }

        if index + 1 < records.len() {
            tokio::time::sleep(PAGE_PACING).await;
        }
    }

    if written.is_empty() {
        return Err(MediaError::new(MediaErrorKind::NoImagesGenerated(
            records.len(),
        )))?;
    }
    Ok(written)
}

/// Write one page's bytes as `p{page}.png`, atomically (temp + rename).
///
/// # Errors
///
/// Returns an error if either write step fails.
pub fn write_page_image(images_dir: &Path, page: &str, bytes: &[u8]) -> HokusaiResult<PathBuf> {
    let path = images_dir.join(format!("p{}.png", page));
    let temp_path = path.with_extension("tmp");

    std::fs::write(&temp_path, bytes).map_err(|e| {
        MediaError::new(MediaErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;
    std::fs::rename(&temp_path, &path).map_err(|e| {
        MediaError::new(MediaErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    Ok(path)
}

/// The generated page images in a note's directory, page-sorted.
///
/// A missing directory yields an empty list — the publish stage warns and
/// carries on with text only.
pub fn list_page_images(images_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(images_dir) else {
        warn!(dir = %images_dir.display(), "Images directory missing");
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with('p') && name.ends_with(".png"))
        .collect();
    names.sort();
    names
        .into_iter()
        .map(|name| images_dir.join(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockGenerator;

    #[test]
    fn page_images_list_sorted_and_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_page_image(dir.path(), "2", b"two").unwrap();
        write_page_image(dir.path(), "1", b"one").unwrap();

        let listed = list_page_images(dir.path());
        let names: Vec<_> = listed
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["p1.png", "p2.png"]);

        assert!(list_page_images(&dir.path().join("absent")).is_empty());
    }

    #[test]
    fn written_page_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_page_image(dir.path(), "1", b"bytes").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn empty_manifest_is_zero_work() {
        let dir = tempfile::tempdir().unwrap();
        let generator = MockGenerator::default();

        let written = generate_note_images(&generator, &[], dir.path()).await.unwrap();
        assert!(written.is_empty());
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn single_record_writes_one_page() {
        let dir = tempfile::tempdir().unwrap();
        let generator = MockGenerator::default();
        let records = vec![PromptRecord::new("1", "Cover with title")];

        let written = generate_note_images(&generator, &records, dir.path())
            .await
            .unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("p1.png"));
        assert_eq!(generator.call_count(), 1);
    }
}
