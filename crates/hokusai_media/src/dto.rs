//! Wire types for the image-generation providers.

use serde::{Deserialize, Serialize};

// --- Gemini-style generateContent (AllAPI) ---

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    pub response_modalities: Vec<String>,
    #[serde(rename = "imageConfig")]
    pub image_config: ImageConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: String,
}

impl GenerateContentRequest {
    /// Build an image-only request for one prompt.
    pub fn image_request(prompt: &str, aspect_ratio: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["image".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                },
            },
        }
    }
}

/// Response body of a `generateContent` call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// Providers differ on the inline-data key casing; accept both.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default, rename = "inline_data", alias = "inlineData")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineData {
    pub data: String,
}

impl GenerateContentResponse {
    /// The first inline image payload (base64), if any part carries one.
    pub fn first_image_data(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.inline_data.as_ref())
            .map(|inline| inline.data.as_str())
            .next()
    }
}

// --- Replicate predictions ---

/// Request body for a prediction call.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    pub version: String,
    pub input: PredictionInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionInput {
    pub prompt: String,
    pub negative_prompt: String,
}

/// Response body of a prediction call.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub status: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// The first output URL; predictions return either a single URL or a
    /// list of them.
    pub fn first_output_url(&self) -> Option<&str> {
        match self.output.as_ref()? {
            serde_json::Value::String(url) => Some(url.as_str()),
            serde_json::Value::Array(urls) => urls.first().and_then(|url| url.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_inline_data_in_snake_case_response() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here is your image"},
                        {"inline_data": {"mime_type": "image/png", "data": "aGVsbG8="}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_image_data(), Some("aGVsbG8="));
    }

    #[test]
    fn finds_inline_data_in_camel_case_response() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"data": "aGVsbG8="}}]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_image_data(), Some("aGVsbG8="));
    }

    #[test]
    fn response_without_image_yields_none() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "no image"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_image_data(), None);
    }

    #[test]
    fn prediction_output_handles_string_and_array() {
        let single: PredictionResponse =
            serde_json::from_str(r#"{"status": "succeeded", "output": "https://x/img.png"}"#)
                .unwrap();
        assert_eq!(single.first_output_url(), Some("https://x/img.png"));

        let list: PredictionResponse = serde_json::from_str(
            r#"{"status": "succeeded", "output": ["https://x/a.png", "https://x/b.png"]}"#,
        )
        .unwrap();
        assert_eq!(list.first_output_url(), Some("https://x/a.png"));
    }
}
