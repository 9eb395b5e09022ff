//! Note identifiers and extracted note content.

use hokusai_error::{NoteError, NoteErrorKind};
use std::str::FromStr;

/// A fixed-width 3-digit note identifier.
///
/// Identifiers are assigned by document authors inside note headers; the
/// pipeline only parses them, it never mints new ones. The width check keeps
/// lexicographic and numeric ordering identical, which the selector relies on.
///
/// # Examples
///
/// ```
/// use hokusai_core::NoteId;
///
/// let id: NoteId = "001".parse().unwrap();
/// assert_eq!(id.as_str(), "001");
/// assert!("1".parse::<NoteId>().is_err());
/// assert!("12a".parse::<NoteId>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// The raw digits of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for NoteId {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(NoteError::new(NoteErrorKind::InvalidId(s.to_string())))
        }
    }
}

/// One per-page illustration caption from a note's image section.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_getters::Getters,
)]
pub struct PageCaption {
    /// Page number as authored (e.g. "1")
    page: String,
    /// Free-text description of the illustration
    description: String,
}

impl PageCaption {
    /// Create a caption for a page.
    pub fn new(page: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            description: description.into(),
        }
    }
}

/// The structured fields sliced out of one note section.
///
/// Derived on demand from a document; carries no identity beyond the note id
/// that produced it. Missing sub-fields degrade to defaults at extraction
/// time, so every field here is always populated (possibly empty).
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_getters::Getters,
)]
pub struct ExtractedNote {
    /// The note's identifier
    id: NoteId,
    /// Post title; synthesized from the id when the title bullet is absent
    title: String,
    /// Post body text; empty when the body section is absent
    body: String,
    /// Topic tags; empty when the tag block is absent
    tags: Vec<String>,
    /// Per-page illustration captions, in authored order
    page_captions: Vec<PageCaption>,
}

impl ExtractedNote {
    /// Assemble an extracted note from its parsed fields.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
        tags: Vec<String>,
        page_captions: Vec<PageCaption>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            tags,
            page_captions,
        }
    }

    /// The fallback title for a note whose title bullet is missing.
    pub fn fallback_title(id: &NoteId) -> String {
        format!("Note {}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_accepts_three_digits() {
        let id: NoteId = "042".parse().unwrap();
        assert_eq!(id.to_string(), "042");
    }

    #[test]
    fn note_id_rejects_wrong_width() {
        assert!("42".parse::<NoteId>().is_err());
        assert!("0042".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
    }

    #[test]
    fn note_id_rejects_non_digits() {
        assert!("a42".parse::<NoteId>().is_err());
        assert!("４２１".parse::<NoteId>().is_err());
    }

    #[test]
    fn note_id_orders_numerically() {
        let mut ids: Vec<NoteId> = ["010", "002", "100"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(NoteId::as_str).collect();
        assert_eq!(sorted, vec!["002", "010", "100"]);
    }

    #[test]
    fn fallback_title_embeds_id() {
        let id: NoteId = "007".parse().unwrap();
        assert_eq!(ExtractedNote::fallback_title(&id), "Note 007");
    }
}
