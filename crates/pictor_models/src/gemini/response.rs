//! Defensive parsing of image generation responses.
//!
//! The documented Gemini shape is tried first. Four legacy shapes of unclear
//! provenance follow in fixed order; they are kept for compatibility and
//! should not be assumed to match any current provider format.

use pictor_core::ImagePayload;
use pictor_error::{ProviderError, ProviderErrorKind};
use serde_json::Value;
use tracing::{debug, warn};

/// A pure function recognizing one response shape.
pub type ShapeParser = fn(&Value) -> Option<ImagePayload>;

/// Known response shapes in priority order, first match wins.
pub const RESPONSE_SHAPES: &[(&str, ShapeParser)] = &[
    ("candidates[].content.parts[].inline_data.data", candidates_inline_data),
    ("image", image_field),
    ("data", data_field),
    ("url", url_field),
    ("images[0]", images_array),
];

/// Extract the image payload from a provider response body.
///
/// # Errors
///
/// Returns [`ProviderErrorKind::UnrecognizedResponse`] naming every attempted
/// shape when none of them match.
///
/// # Examples
///
/// ```
/// use pictor_core::ImagePayload;
/// use pictor_models::parse_image_response;
/// use serde_json::json;
///
/// let body = json!({ "url": "https://cdn.example.com/a.png" });
/// let payload = parse_image_response(&body).unwrap();
/// assert!(matches!(payload, ImagePayload::Url(_)));
/// ```
pub fn parse_image_response(body: &Value) -> Result<ImagePayload, ProviderError> {
    for (name, parser) in RESPONSE_SHAPES {
        if let Some(payload) = parser(body) {
            debug!(shape = name, encoding = payload.encoding(), "Matched response shape");
            return Ok(payload);
        }
    }

    warn!("Response matched no known image shape");
    Err(ProviderError::new(ProviderErrorKind::UnrecognizedResponse {
        attempted: RESPONSE_SHAPES
            .iter()
            .map(|(name, _)| name.to_string())
            .collect(),
    }))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn candidates_inline_data(body: &Value) -> Option<ImagePayload> {
    body.get("candidates")?
        .as_array()?
        .iter()
        .filter_map(|candidate| candidate.get("content")?.get("parts")?.as_array())
        .flatten()
        .find_map(|part| {
            let inline = part.get("inline_data").or_else(|| part.get("inlineData"))?;
            non_empty_str(inline.get("data"))
        })
        .map(|data| ImagePayload::Base64(data.to_string()))
}

fn image_field(body: &Value) -> Option<ImagePayload> {
    non_empty_str(body.get("image")).map(ImagePayload::tag)
}

fn data_field(body: &Value) -> Option<ImagePayload> {
    non_empty_str(body.get("data")).map(ImagePayload::tag)
}

fn url_field(body: &Value) -> Option<ImagePayload> {
    non_empty_str(body.get("url")).map(ImagePayload::tag)
}

fn images_array(body: &Value) -> Option<ImagePayload> {
    non_empty_str(body.get("images")?.as_array()?.first()).map(ImagePayload::tag)
}
