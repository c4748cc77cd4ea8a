//! Provider configuration resolved from the environment.

use derive_getters::Getters;
use pictor_error::ConfigError;
use std::time::Duration;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default image model.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Default bound on a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the image provider.
///
/// Read once at startup and never changed, so the configured state stays
/// stable for the life of the process.
#[derive(Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ProviderConfig {
    /// API key, `None` when unconfigured
    #[builder(default)]
    api_key: Option<String>,
    /// Base URL without trailing slash
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Request timeout
    #[builder(default = "DEFAULT_TIMEOUT")]
    timeout: Duration,
}

impl ProviderConfig {
    /// Creates a new builder for ProviderConfig.
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (optional; unset leaves the provider unconfigured)
    /// - `GEMINI_BASE_URL` (default: the public Gemini endpoint)
    /// - `GEMINI_IMAGE_MODEL` (default: [`DEFAULT_MODEL`])
    /// - `PICTOR_REQUEST_TIMEOUT_SECS` (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY").map(|k| k.trim().to_string());
        let base_url = non_empty("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let model = non_empty("GEMINI_IMAGE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout = match non_empty("PICTOR_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    ConfigError::new(format!(
                        "PICTOR_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                if secs == 0 {
                    return Err(ConfigError::new(
                        "PICTOR_REQUEST_TIMEOUT_SECS must be greater than zero",
                    ));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::new(format!(
                "GEMINI_BASE_URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout,
        })
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Replace every occurrence of the API key in `text`.
    pub fn redact(&self, text: &str) -> String {
        match &self.api_key {
            Some(key) if !key.is_empty() => text.replace(key.as_str(), "[REDACTED]"),
            _ => text.to_string(),
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
