//! Compiled image-generation prompt records.

/// Style preamble prepended to every generation prompt.
pub const STYLE_PREAMBLE: &str = "3:4 vertical social media infographic, \
Modern infographic style, High contrast, 4K quality, \
clean modern Chinese typography";

/// Domain qualifier appended to every generation prompt.
pub const DOMAIN_QUALIFIER: &str = "professional design for civil service exam content";

/// Negative prompt shared by every record in a run.
pub const NEGATIVE_PROMPT: &str = "blurry, low quality, watermark, text errors, \
cluttered, low contrast, photos of people, realistic faces";

/// A ready-to-send image-generation request derived from one page caption.
///
/// Serialized into the prompt manifest consumed by the image driver; field
/// names are the manifest wire format.
///
/// # Examples
///
/// ```
/// use hokusai_core::{PromptRecord, STYLE_PREAMBLE};
///
/// let record = PromptRecord::new("1", "Cover with title");
/// assert!(record.prompt().starts_with(STYLE_PREAMBLE));
/// assert!(record.prompt().contains("Cover with title"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_getters::Getters,
)]
pub struct PromptRecord {
    /// Page number, preserved from the caption
    page: String,
    /// The caption description the prompt was derived from
    description: String,
    /// Full positive prompt: style preamble, description, domain qualifier
    prompt: String,
    /// Fixed negative prompt
    negative_prompt: String,
}

impl PromptRecord {
    /// Compile a caption into a generation request.
    pub fn new(page: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        let prompt = format!("{}, {}, {}", STYLE_PREAMBLE, description, DOMAIN_QUALIFIER);
        Self {
            page: page.into(),
            description,
            prompt,
            negative_prompt: NEGATIVE_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_concatenates_preamble_description_qualifier() {
        let record = PromptRecord::new("2", "Key points list");
        assert_eq!(
            record.prompt(),
            &format!("{}, Key points list, {}", STYLE_PREAMBLE, DOMAIN_QUALIFIER)
        );
        assert_eq!(record.negative_prompt(), NEGATIVE_PROMPT);
    }

    #[test]
    fn manifest_field_names_are_stable() {
        let record = PromptRecord::new("1", "Cover");
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("page").is_some());
        assert!(json.get("description").is_some());
        assert!(json.get("prompt").is_some());
        assert!(json.get("negative_prompt").is_some());
    }
}
