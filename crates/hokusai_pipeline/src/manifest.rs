//! Prompt manifest persistence.
//!
//! Compiled prompts are written to `note{id}_prompts/prompts.json` under the
//! output directory so the image stage can run standalone; generated images
//! land beside them in `note{id}_images/`.

use hokusai_core::{NoteId, PromptRecord};
use hokusai_error::{HokusaiResult, JsonError};
use std::path::{Path, PathBuf};

/// Directory holding a note's prompt manifest.
pub fn prompts_dir(output_dir: &Path, id: &NoteId) -> PathBuf {
    output_dir.join(format!("note{}_prompts", id))
}

/// Directory holding a note's generated images.
pub fn images_dir(output_dir: &Path, id: &NoteId) -> PathBuf {
    output_dir.join(format!("note{}_images", id))
}

/// Write the prompt manifest for a note.
///
/// Returns the manifest path. Directories are created as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
#[tracing::instrument(skip_all, fields(note = %id, count = records.len()))]
pub fn write_manifest(
    output_dir: &Path,
    id: &NoteId,
    records: &[PromptRecord],
) -> HokusaiResult<PathBuf> {
    let dir = prompts_dir(output_dir, id);
    std::fs::create_dir_all(&dir)
        .map_err(|e| JsonError::new(format!("create {}: {}", dir.display(), e)))?;

    let path = dir.join("prompts.json");
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| JsonError::new(format!("serialize manifest: {}", e)))?;
    std::fs::write(&path, json)
        .map_err(|e| JsonError::new(format!("write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "Wrote prompt manifest");
    Ok(path)
}

/// Load a note's prompt manifest.
///
/// # Errors
///
/// Returns an error when the manifest is missing or unparsable — the image
/// stage requires prompts to have been compiled first.
pub fn load_manifest(output_dir: &Path, id: &NoteId) -> HokusaiResult<Vec<PromptRecord>> {
    let path = prompts_dir(output_dir, id).join("prompts.json");
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| JsonError::new(format!("read {}: {}", path.display(), e)))?;
    let records = serde_json::from_str(&raw)
        .map_err(|e| JsonError::new(format!("parse {}: {}", path.display(), e)))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NoteId {
        s.parse().unwrap()
    }

    #[test]
    fn manifest_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            PromptRecord::new("1", "Cover with title"),
            PromptRecord::new("2", "Key points list"),
        ];

        let path = write_manifest(dir.path(), &id("001"), &records).unwrap();
        assert!(path.ends_with("note001_prompts/prompts.json"));

        let loaded = load_manifest(dir.path(), &id("001")).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_manifest(dir.path(), &id("001")).is_err());
    }

    #[test]
    fn per_note_directories_are_disjoint() {
        let out = Path::new("output");
        assert_eq!(
            prompts_dir(out, &id("001")),
            Path::new("output/note001_prompts")
        );
        assert_eq!(
            images_dir(out, &id("001")),
            Path::new("output/note001_images")
        );
    }
}
