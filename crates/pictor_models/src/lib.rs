//! Image generation provider integrations for Pictor.
//!
//! The [`ImageProvider`] trait is the seam between tool handlers and remote
//! backends. [`GeminiImageClient`] implements it against the Gemini
//! `generateContent` endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod provider;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT, ProviderConfig, ProviderConfigBuilder,
};
pub use gemini::{
    GeminiImageClient, GenerateContentRequest, RESPONSE_SHAPES, ShapeParser, aspect_ratio,
    compose_prompt, parse_image_response, size_tier,
};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBehavior, MockImageProvider};
pub use provider::ImageProvider;
