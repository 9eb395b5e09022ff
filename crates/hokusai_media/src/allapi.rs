//! AllAPI image client (Gemini-style `generateContent`).

use crate::dto::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hokusai_core::PromptRecord;
use hokusai_error::{HokusaiResult, MediaError, MediaErrorKind};
use hokusai_interface::ImageGenerator;
use reqwest::Client;
use tokio_retry2::{strategy::FixedInterval, Retry, RetryError};
use tracing::{debug, instrument, warn};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://allapi.store";

/// Default image model.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Vertical social-media format.
const ASPECT_RATIO: &str = "3:4";

/// Attempts per page, with a fixed pause between them.
const MAX_ATTEMPTS: usize = 3;
const RETRY_DELAY_MS: u64 = 3_000;

/// Client for the AllAPI image endpoint.
///
/// Sends one `generateContent` request per prompt record and decodes the
/// first inline base64 image part of the response.
#[derive(Debug, Clone)]
pub struct AllApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl AllApiClient {
    /// Create a client from the `ALLAPI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    #[instrument(skip_all)]
    pub fn from_env() -> HokusaiResult<Self> {
        let api_key = std::env::var("ALLAPI_API_KEY").map_err(|e| {
            MediaError::new(MediaErrorKind::InvalidConfiguration(format!(
                "ALLAPI_API_KEY not set: {}",
                e
            )))
        })?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a client with an explicit API key and default endpoint/model.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the API host (hosted-gateway deployments).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn request_once(&self, prompt: &str) -> HokusaiResult<Vec<u8>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let payload = GenerateContentRequest::image_request(prompt, ASPECT_RATIO);

        debug!(url = %url, "Sending AllAPI image request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
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

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Decode(e.to_string())))?;

        let data = body
            .first_image_data()
            .ok_or_else(|| MediaError::new(MediaErrorKind::MissingImageData))?;

        BASE64
            .decode(data)
            .map_err(|e| MediaError::new(MediaErrorKind::Decode(e.to_string())).into())
    }
}

#[async_trait]
impl ImageGenerator for AllApiClient {
    #[instrument(skip(self, record), fields(page = %record.page(), model = %self.model))]
    async fn generate(&self, record: &PromptRecord) -> HokusaiResult<Vec<u8>> {
        let strategy = FixedInterval::from_millis(RETRY_DELAY_MS).take(MAX_ATTEMPTS - 1);

        Retry::spawn(strategy, || async {
            self.request_once(record.prompt()).await.map_err(|e| {
                warn!(page = %record.page(), error = %e, "Image request failed, will retry");
                RetryError::transient(e)
            })
        })
        .await
    }

    fn provider_name(&self) -> &'static str {
        "allapi"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
