//! Provider-independent generation result.

use crate::OutputFormat;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Where the generated image bytes live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ImagePayload {
    /// Base64-encoded image bytes
    Base64(String),
    /// Remote URL to fetch the image from
    Url(String),
}

impl ImagePayload {
    /// Tag a raw string from a provider response.
    ///
    /// Strings starting with `http` are URLs, anything else is base64.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictor_core::ImagePayload;
    ///
    /// assert!(matches!(ImagePayload::tag("https://cdn/x.png"), ImagePayload::Url(_)));
    /// assert!(matches!(ImagePayload::tag("iVBORw0KGgo="), ImagePayload::Base64(_)));
    /// ```
    pub fn tag(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with("http") {
            ImagePayload::Url(raw)
        } else {
            ImagePayload::Base64(raw)
        }
    }

    /// Short name of the payload encoding.
    pub fn encoding(&self) -> &'static str {
        match self {
            ImagePayload::Base64(_) => "base64",
            ImagePayload::Url(_) => "url",
        }
    }
}

/// Output of a successful provider call.
///
/// Ownership moves to the caller, which is responsible for persisting it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GenerationResult {
    /// Image bytes or location
    payload: ImagePayload,
    /// Encoding the caller asked for
    format: OutputFormat,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl GenerationResult {
    /// Create a new result.
    pub fn new(payload: ImagePayload, format: OutputFormat, width: u32, height: u32) -> Self {
        Self {
            payload,
            format,
            width,
            height,
        }
    }

    /// Consume the result, returning the payload.
    pub fn into_payload(self) -> ImagePayload {
        self.payload
    }
}
