//! Request construction for the Gemini image API.

use derive_getters::Getters;
use pictor_core::GenerationRequest;
use serde::Serialize;

/// Aspect ratio tag closest to `width`:`height`.
///
/// Square sizes map to `1:1`. Landscape ratios in `[1.4, 1.6]` map to `3:2`,
/// ratios of `1.7` and above to `16:9`, anything else to `4:3`. Portrait
/// sizes mirror these with `2:3`, `9:16` and `3:4`.
///
/// # Examples
///
/// ```
/// use pictor_models::aspect_ratio;
///
/// assert_eq!(aspect_ratio(1024, 1024), "1:1");
/// assert_eq!(aspect_ratio(1536, 1024), "3:2");
/// assert_eq!(aspect_ratio(1024, 1536), "2:3");
/// ```
pub fn aspect_ratio(width: u32, height: u32) -> &'static str {
    if width == height {
        return "1:1";
    }
    let (long, short) = (width.max(height) as f64, width.min(height) as f64);
    let ratio = long / short;
    let landscape = width > height;

    match ratio {
        r if (1.4..=1.6).contains(&r) => {
            if landscape {
                "3:2"
            } else {
                "2:3"
            }
        }
        r if r >= 1.7 => {
            if landscape {
                "16:9"
            } else {
                "9:16"
            }
        }
        _ => {
            if landscape {
                "4:3"
            } else {
                "3:4"
            }
        }
    }
}

/// Coarse output size tier from the larger dimension.
///
/// # Examples
///
/// ```
/// use pictor_models::size_tier;
///
/// assert_eq!(size_tier(1024, 768), "1K");
/// assert_eq!(size_tier(2000, 1000), "2K");
/// assert_eq!(size_tier(3000, 3000), "4K");
/// ```
pub fn size_tier(width: u32, height: u32) -> &'static str {
    match width.max(height) {
        0..=1024 => "1K",
        1025..=2048 => "2K",
        _ => "4K",
    }
}

/// Fold style, detail and background options into the free-text prompt.
pub fn compose_prompt(request: &GenerationRequest) -> String {
    let subject = request.prompt().trim().trim_end_matches('.');
    match request.detail().as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => format!(
            "{} of: {}. {}. Render it with a {}.",
            request.style().descriptor(),
            subject,
            detail.trim_end_matches('.'),
            request.background().phrase()
        ),
        None => format!(
            "{} of: {}. Render it with a {}.",
            request.style().descriptor(),
            subject,
            request.background().phrase()
        ),
    }
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Single user turn carrying the prompt
    contents: Vec<RequestContent>,
    /// Output modality and image settings
    generation_config: GenerationConfig,
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    /// Text parts of the turn
    pub parts: Vec<TextPart>,
}

/// A text part.
#[derive(Debug, Clone, Serialize)]
pub struct TextPart {
    /// Prompt text
    pub text: String,
}

/// Generation settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `["IMAGE"]`
    pub response_modalities: Vec<String>,
    /// Aspect ratio and size tier
    pub image_config: ImageConfig,
}

/// Image shape settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio tag such as `16:9`
    pub aspect_ratio: String,
    /// Size tier: `1K`, `2K` or `4K`
    pub image_size: String,
}

impl GenerateContentRequest {
    /// Build the wire request for `request`.
    pub fn from_request(request: &GenerationRequest) -> Self {
        let (width, height) = (*request.size().width(), *request.size().height());
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: compose_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: aspect_ratio(width, height).to_string(),
                    image_size: size_tier(width, height).to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::{BackgroundMode, ImageSize, ImageStyle};
    use serde_json::json;

    #[test]
    fn test_aspect_ratio_bands() {
        assert_eq!(aspect_ratio(1024, 1024), "1:1");
        assert_eq!(aspect_ratio(1536, 1024), "3:2");
        assert_eq!(aspect_ratio(1024, 1536), "2:3");
        assert_eq!(aspect_ratio(1750, 1000), "16:9");
        assert_eq!(aspect_ratio(1000, 1750), "9:16");
        assert_eq!(aspect_ratio(1400, 1000), "3:2");
        assert_eq!(aspect_ratio(1600, 1000), "3:2");
    }

    #[test]
    fn test_aspect_ratio_gaps_fall_to_four_three() {
        assert_eq!(aspect_ratio(1200, 1000), "4:3");
        assert_eq!(aspect_ratio(1650, 1000), "4:3");
        assert_eq!(aspect_ratio(1000, 1300), "3:4");
    }

    #[test]
    fn test_size_tier_bands() {
        assert_eq!(size_tier(1024, 1024), "1K");
        assert_eq!(size_tier(2000, 512), "2K");
        assert_eq!(size_tier(2048, 2048), "2K");
        assert_eq!(size_tier(3000, 1000), "4K");
    }

    #[test]
    fn test_compose_prompt_folds_options() {
        let request = GenerationRequest::builder()
            .prompt("a fox in the snow.")
            .style(ImageStyle::Flat)
            .background(BackgroundMode::Transparent)
            .build()
            .unwrap();
        let text = compose_prompt(&request);
        assert!(text.starts_with(ImageStyle::Flat.descriptor()));
        assert!(text.contains("a fox in the snow"));
        assert!(text.ends_with("transparent background."));
    }

    #[test]
    fn test_compose_prompt_appends_detail() {
        let request = GenerationRequest::builder()
            .prompt("a rocket")
            .detail("centered with even padding.")
            .build()
            .unwrap();
        let text = compose_prompt(&request);
        assert!(text.contains("a rocket. centered with even padding. Render it"));
    }

    #[test]
    fn test_wire_body_shape() {
        let request = GenerationRequest::builder()
            .prompt("city skyline")
            .size(ImageSize::new(1536, 1024))
            .build()
            .unwrap();
        let body = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();

        assert!(body["contents"][0]["parts"][0]["text"].is_string());
        assert_eq!(body["generationConfig"]["responseModalities"], json!(["IMAGE"]));
        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "3:2");
        assert_eq!(body["generationConfig"]["imageConfig"]["imageSize"], "2K");
    }
}
