//! Replicate prediction client.

use crate::dto::{PredictionInput, PredictionRequest, PredictionResponse};
use async_trait::async_trait;
use hokusai_core::PromptRecord;
use hokusai_error::{HokusaiResult, MediaError, MediaErrorKind};
use hokusai_interface::ImageGenerator;
use reqwest::Client;
use tracing::{debug, instrument};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.replicate.com";

/// Client for the Replicate predictions API.
///
/// Creates a prediction with `Prefer: wait` so the call blocks until the
/// model finishes, then fetches the first output URL for the image bytes.
#[derive(Debug, Clone)]
pub struct ReplicateClient {
    client: Client,
    api_token: String,
    base_url: String,
    model_version: String,
}

impl ReplicateClient {
    /// Create a client from `REPLICATE_API_TOKEN` and
    /// `REPLICATE_MODEL_VERSION`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    #[instrument(skip_all)]
    pub fn from_env() -> HokusaiResult<Self> {
        let api_token = std::env::var("REPLICATE_API_TOKEN").map_err(|e| {
            MediaError::new(MediaErrorKind::InvalidConfiguration(format!(
                "REPLICATE_API_TOKEN not set: {}",
                e
            )))
        })?;
        let model_version = std::env::var("REPLICATE_MODEL_VERSION").map_err(|e| {
            MediaError::new(MediaErrorKind::InvalidConfiguration(format!(
                "REPLICATE_MODEL_VERSION not set: {}",
                e
            )))
        })?;
        Ok(Self::new(api_token, model_version))
    }

    /// Create a client with explicit credentials and the default host.
    pub fn new(api_token: impl Into<String>, model_version: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model_version: model_version.into(),
        }
    }

    /// Override the API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ImageGenerator for ReplicateClient {
    #[instrument(skip(self, record), fields(page = %record.page()))]
    async fn generate(&self, record: &PromptRecord) -> HokusaiResult<Vec<u8>> {
        let url = format!("{}/v1/predictions", self.base_url);
        let payload = PredictionRequest {
            version: self.model_version.clone(),
            input: PredictionInput {
                prompt: record.prompt().clone(),
                negative_prompt: record.negative_prompt().clone(),
            },
        };

        debug!(url = %url, "Creating prediction");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .header("Prefer", "wait")
            .json(&payload)
            .send()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect();
            return Err(MediaError::new(MediaErrorKind::Api { status, message }))?;
        }

        let prediction: PredictionResponse = response
            .json()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Decode(e.to_string())))?;

        if prediction.status != "succeeded" {
            let message = prediction
                .error
                .unwrap_or_else(|| format!("prediction status: {}", prediction.status));
            return Err(MediaError::new(MediaErrorKind::Api { status: 200, message }))?;
        }

        let output_url = prediction
            .first_output_url()
            .ok_or_else(|| MediaError::new(MediaErrorKind::MissingImageData))?;

        debug!(url = %output_url, "Fetching prediction output");
        let image = self
            .client
            .get(output_url)
            .send()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Http(e.to_string())))?
            .bytes()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Http(e.to_string())))?;

        Ok(image.to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "replicate"
    }

    fn model_name(&self) -> &str {
        &self.model_version
    }
}
