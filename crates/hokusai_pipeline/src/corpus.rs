//! Note corpus enumeration.

use hokusai_core::NoteId;
use hokusai_error::{CorpusError, CorpusErrorKind, HokusaiResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Header line introducing one note section, capturing its id.
static NOTE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## 【Note(\d{3})】").expect("valid note header pattern"));

/// A read-only directory of markdown documents, each holding zero or more
/// note sections.
///
/// The corpus is owned by an external authoring process; this type only
/// reads it. Documents are always visited in filename-sorted order so that
/// enumeration and lookup are deterministic across runs.
#[derive(Debug, Clone)]
pub struct NoteCorpus {
    notes_dir: PathBuf,
}

impl NoteCorpus {
    /// Create a corpus over a note directory.
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    /// The directory this corpus reads from.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Read every `.md` document, in filename-sorted order.
    ///
    /// # Errors
    ///
    /// Returns an error if the note directory is missing or a document
    /// cannot be read.
    #[tracing::instrument(skip(self), fields(dir = %self.notes_dir.display()))]
    pub fn documents(&self) -> HokusaiResult<Vec<(String, String)>> {
        if !self.notes_dir.is_dir() {
            return Err(CorpusError::new(CorpusErrorKind::DirectoryMissing(
                self.notes_dir.display().to_string(),
            )))?;
        }

        let entries = std::fs::read_dir(&self.notes_dir).map_err(|e| {
            CorpusError::new(CorpusErrorKind::FileRead(format!(
                "{}: {}",
                self.notes_dir.display(),
                e
            )))
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".md"))
            .collect();
        names.sort();

        let mut documents = Vec::with_capacity(names.len());
        for name in names {
            let path = self.notes_dir.join(&name);
            let content = std::fs::read_to_string(&path).map_err(|e| {
                CorpusError::new(CorpusErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            documents.push((name, content));
        }

        tracing::debug!(count = documents.len(), "Read corpus documents");
        Ok(documents)
    }

    /// Enumerate every note id in the corpus, canonically sorted.
    ///
    /// Header matches are collected per document in document order, across
    /// documents in filename order, then sorted lexicographically (equal to
    /// numeric order for the fixed-width ids). Duplicates are kept; section
    /// lookup resolves them first-match-wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the note directory cannot be scanned.
    pub fn list_note_ids(&self) -> HokusaiResult<Vec<NoteId>> {
        let mut ids = Vec::new();
        for (_, content) in self.documents()? {
            for captures in NOTE_HEADER.captures_iter(&content) {
                let id: NoteId = captures[1].parse()?;
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_pattern_matches_only_three_digit_ids() {
        assert!(NOTE_HEADER.is_match("## 【Note001】Exam tips"));
        assert!(!NOTE_HEADER.is_match("## 【Note01】short id"));
        assert!(!NOTE_HEADER.is_match("# 【Note001】wrong level"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let corpus = NoteCorpus::new("/nonexistent/notes");
        assert!(corpus.documents().is_err());
        assert!(corpus.list_note_ids().is_err());
    }
}
