//! Prompt compilation.

use hokusai_core::{ExtractedNote, PromptRecord};

/// Compile a note's page captions into generation requests.
///
/// Pure and order-preserving: one record per caption, each carrying the
/// fixed style preamble, the caption description, and the fixed domain
/// qualifier, plus the shared negative prompt. An empty caption list yields
/// an empty sequence — nothing to generate, surfaced upward as zero work
/// rather than an error.
pub fn compile_prompts(note: &ExtractedNote) -> Vec<PromptRecord> {
    note.page_captions()
        .iter()
        .map(|caption| PromptRecord::new(caption.page().clone(), caption.description().clone()))
        .collect()
}
