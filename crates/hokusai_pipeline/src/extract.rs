//! Positional note-section extraction.
//!
//! Documents concatenate many note sections; a section runs from its header
//! marker to the newline before the next header (or end-of-document). Within
//! a located section, each sub-field is pulled out independently and
//! tolerantly: a malformed or missing sub-field degrades to a default, only
//! a missing header marker is fatal.

use crate::NoteCorpus;
use hokusai_core::{ExtractedNote, NoteId, PageCaption};
use hokusai_error::{HokusaiResult, NoteError, NoteErrorKind};
use regex::Regex;
use std::sync::LazyLock;

/// Any note header strictly after the current one bounds the section.
static NEXT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n## 【Note\d{3}】").expect("valid next-header pattern"));

/// First "Title A" labeled bullet inside a section.
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- \*\*Title A\*\*：(.+)").expect("valid title pattern"));

/// Body text between the Body header and the Image Captions header.
static BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)### Body\s*\n(.*?)\n### Image Captions").expect("valid body pattern")
});

/// Fenced tag block following the Topic Tags header.
static TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)### Topic Tags\s*\n```\s*\n(.+?)\n```").expect("valid tags pattern")
});

/// The Image Captions block, bounded by the next sub-header or section end.
static CAPTIONS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)### Image Captions\s*\n(.*?)(?:\n###|\z)").expect("valid captions pattern")
});

/// One caption line: page number, full-width colon, free-text description.
static CAPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- P(\d+)：(.+)$").expect("valid caption line pattern"));

/// The header marker introducing a note's section.
pub fn header_marker(id: &NoteId) -> String {
    format!("## 【Note{}】", id)
}

/// Locate the byte span of a note's section inside a document.
///
/// The span starts at the header marker and ends at the newline preceding
/// the next note header, or at end-of-text when the note is the last one in
/// the document. Returns `None` when the document does not contain the
/// marker.
pub fn locate_section(text: &str, id: &NoteId) -> Option<(usize, usize)> {
    let marker = header_marker(id);
    let start = text.find(&marker)?;
    let after_marker = start + marker.len();
    let end = NEXT_HEADER
        .find(&text[after_marker..])
        .map(|m| after_marker + m.start())
        .unwrap_or(text.len());
    Some((start, end))
}

/// Extract a note's structured fields from the corpus.
///
/// Documents are scanned in the corpus's filename-sorted order; the first
/// one containing the note's header marker wins.
///
/// # Errors
///
/// Returns `NoteError(NotFound)` when no document contains the marker, or a
/// corpus error when the directory cannot be read. Missing sub-fields are
/// never errors.
#[tracing::instrument(skip(corpus))]
pub fn extract(corpus: &NoteCorpus, id: &NoteId) -> HokusaiResult<ExtractedNote> {
    for (name, content) in corpus.documents()? {
        if let Some((start, end)) = locate_section(&content, id) {
            let section = &content[start..end];
            tracing::debug!(
                document = %name,
                section_bytes = section.len(),
                "Located note section"
            );
            return Ok(extract_fields(id, section));
        }
    }

    Err(NoteError::new(NoteErrorKind::NotFound(id.to_string())))?
}

fn extract_fields(id: &NoteId, section: &str) -> ExtractedNote {
    let title = TITLE
        .captures(section)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| ExtractedNote::fallback_title(id));

    let body = BODY
        .captures(section)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    let tags = TAGS
        .captures(section)
        .map(|c| {
            c[1].split('#')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let page_captions = CAPTIONS_BLOCK
        .captures(section)
        .map(|c| extract_caption_lines(&c[1]))
        .unwrap_or_default();

    ExtractedNote::new(id.clone(), title, body, tags, page_captions)
}

/// Authors may interleave commentary with caption bullets; lines that do
/// not match the caption shape are skipped.
fn extract_caption_lines(block: &str) -> Vec<PageCaption> {
    block
        .lines()
        .filter_map(|line| CAPTION_LINE.captures(line.trim()))
        .map(|c| PageCaption::new(&c[1], &c[2]))
        .collect()
}
