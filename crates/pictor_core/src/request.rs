//! Provider-independent generation request.

use crate::{BackgroundMode, ImageSize, ImageStyle, OutputFormat};
use derive_builder::Builder;
use derive_getters::Getters;
use pictor_error::ValidationError;
use serde::Serialize;

/// Longest prompt accepted, in characters.
pub const MAX_PROMPT_CHARS: usize = 2000;

/// A single image generation request.
///
/// Built once per tool call and never mutated afterward.
///
/// # Examples
///
/// ```
/// use pictor_core::{GenerationRequest, ImageSize, ImageStyle};
///
/// let request = GenerationRequest::builder()
///     .prompt("a lighthouse at dusk")
///     .style(ImageStyle::Photo)
///     .size(ImageSize::new(1536, 1024))
///     .build()
///     .unwrap();
/// assert_eq!(request.prompt(), "a lighthouse at dusk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder, Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "ValidationError"))]
pub struct GenerationRequest {
    /// Free-text description of the image, as the caller wrote it
    prompt: String,
    /// Rendering guidance added by a tool, outside the prompt length cap
    #[builder(default, setter(into, strip_option))]
    detail: Option<String>,
    /// Visual style
    #[builder(default)]
    style: ImageStyle,
    /// Target pixel size
    #[builder(default = "ImageSize::new(1024, 1024)")]
    size: ImageSize,
    /// Background treatment
    #[builder(default)]
    background: BackgroundMode,
    /// Encoding of the persisted file
    #[builder(default)]
    output_format: OutputFormat,
}

impl GenerationRequest {
    /// Creates a new builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(prompt) = &self.prompt {
            let chars = prompt.trim().chars().count();
            if chars == 0 || prompt.chars().count() > MAX_PROMPT_CHARS {
                return Err(ValidationError::new(format!(
                    "prompt must be 1-{} characters",
                    MAX_PROMPT_CHARS
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::builder().prompt("a cat").build().unwrap();
        assert_eq!(*request.style(), ImageStyle::Illustration);
        assert_eq!(*request.size(), ImageSize::new(1024, 1024));
        assert_eq!(*request.background(), BackgroundMode::Solid);
        assert_eq!(*request.output_format(), OutputFormat::Png);
    }

    #[test]
    fn test_rejects_empty_prompt() {
        assert!(GenerationRequest::builder().prompt("   ").build().is_err());
    }

    #[test]
    fn test_rejects_long_prompt() {
        let prompt = "a".repeat(MAX_PROMPT_CHARS + 1);
        assert!(GenerationRequest::builder().prompt(prompt).build().is_err());
    }

    #[test]
    fn test_detail_not_counted_against_prompt() {
        let request = GenerationRequest::builder()
            .prompt("a".repeat(MAX_PROMPT_CHARS))
            .detail("centered, legible at small sizes")
            .build()
            .unwrap();
        assert_eq!(request.prompt().chars().count(), MAX_PROMPT_CHARS);
        assert_eq!(
            request.detail().as_deref(),
            Some("centered, legible at small sizes")
        );
    }

    #[test]
    fn test_missing_prompt_names_field() {
        let err = GenerationRequest::builder().build().unwrap_err();
        assert!(err.message.contains("prompt"));
    }
}
