//! HTTP client for the Gemini image API.

use super::request::GenerateContentRequest;
use super::response::parse_image_response;
use crate::{ImageProvider, ProviderConfig};
use async_trait::async_trait;
use pictor_core::{GenerationRequest, GenerationResult};
use pictor_error::{ConfigError, PictorResult, ProviderError, ProviderErrorKind};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// Header the Gemini API reads the credential from.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of an error body kept in error messages.
const MAX_ERROR_BODY: usize = 500;

/// Image provider backed by the Gemini `generateContent` endpoint.
///
/// Issues exactly one request per [`generate`](ImageProvider::generate) call,
/// bounded by the configured timeout. No retries.
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: Client,
    config: ProviderConfig,
}

impl GeminiImageClient {
    /// Creates a new client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            configured = config.is_configured(),
            "Created Gemini image client"
        );

        Ok(Self { client, config })
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ProviderConfig::from_env()?)
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url(),
            self.config.model()
        )
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl ImageProvider for GeminiImageClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        self.config.model()
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    #[instrument(skip(self, request), fields(model = %self.config.model(), size = %request.size()))]
    async fn generate(&self, request: &GenerationRequest) -> PictorResult<GenerationResult> {
        let api_key = self
            .config
            .api_key()
            .as_deref()
            .ok_or_else(|| ConfigError::new("GEMINI_API_KEY is not set"))?;

        let body = GenerateContentRequest::from_request(request);
        debug!(
            aspect_ratio = %body.generation_config().image_config.aspect_ratio,
            image_size = %body.generation_config().image_config.image_size,
            "Sending image generation request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let message = self.config.redact(&e.to_string());
                error!(error = %message, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(message))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            let message = self.config.redact(&e.to_string());
            error!(error = %message, "Failed to read response body");
            ProviderError::new(ProviderErrorKind::Transport(message))
        })?;

        if !status.is_success() {
            let message: String = self.config.redact(&text).chars().take(MAX_ERROR_BODY).collect();
            error!(status = %status, "Image API returned an error");
            return Err(ProviderError::new(ProviderErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let json: Value = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "Response body is not JSON");
            ProviderError::new(ProviderErrorKind::InvalidJson(e.to_string()))
        })?;

        let payload = parse_image_response(&json)?;
        info!(encoding = payload.encoding(), "Image generated");

        Ok(GenerationResult::new(
            payload,
            *request.output_format(),
            *request.size().width(),
            *request.size().height(),
        ))
    }

    fn redact(&self, text: &str) -> String {
        self.config.redact(text)
    }
}
