//! Argument parsing and validation helpers shared by the tools.

use pictor_core::{ImageSize, OutputFormat};
use pictor_error::ValidationError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Sizes accepted by `generate_image` and `generate_hero`.
pub const GENERATE_SIZES: &[&str] = &["1024x1024", "1024x1536", "1536x1024"];

/// Sizes accepted by `generate_icon`.
pub const ICON_SIZES: &[&str] = &["256x256", "512x512"];

/// Visual theme of a generated icon.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IconTheme {
    /// Simple geometric glyph
    #[default]
    Minimal,
    /// Rounded, colorful, friendly
    Playful,
    /// Restrained, professional palette
    Corporate,
}

impl IconTheme {
    /// Theme phrase folded into the icon prompt.
    pub fn phrase(&self) -> &'static str {
        match self {
            IconTheme::Minimal => {
                "minimal line icon, single accent color, simple geometric shapes, no text"
            }
            IconTheme::Playful => {
                "playful app icon, rounded shapes, vibrant friendly colors, subtle depth, no text"
            }
            IconTheme::Corporate => {
                "professional corporate icon, restrained palette, crisp edges, balanced composition, no text"
            }
        }
    }
}

/// Deserialize tool arguments into `T`.
///
/// A missing argument object is treated as empty so required-field errors
/// name the field.
pub(crate) fn parse_args<T: DeserializeOwned>(input: Value) -> Result<T, ValidationError> {
    let input = if input.is_null() {
        Value::Object(Default::default())
    } else {
        input
    };
    serde_json::from_value(input).map_err(|e| ValidationError::new(e.to_string()))
}

/// Check that `value` has between `min` and `max` characters after trimming.
pub(crate) fn check_len(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let count = value.trim().chars().count();
    if count < min || value.chars().count() > max {
        if min == 0 {
            return Err(ValidationError::new(format!(
                "{} must be at most {} characters",
                field, max
            )));
        }
        return Err(ValidationError::new(format!(
            "{} must be {}-{} characters",
            field, min, max
        )));
    }
    Ok(())
}

/// Resolve an optional size argument against the allowed set.
pub(crate) fn parse_size(
    raw: Option<&str>,
    allowed: &[&str],
    default: &str,
) -> Result<ImageSize, ValidationError> {
    let raw = raw.unwrap_or(default);
    if !allowed.contains(&raw) {
        return Err(ValidationError::new(format!(
            "size must be one of {}, got '{}'",
            allowed.join(", "),
            raw
        )));
    }
    raw.parse()
}

/// Output format with its default applied.
pub(crate) fn output_format(raw: Option<OutputFormat>) -> OutputFormat {
    raw.unwrap_or_default()
}

/// Schema fragment for the shared `output_format` argument.
pub(crate) fn output_format_schema() -> Value {
    use strum::IntoEnumIterator;
    serde_json::json!({
        "type": "string",
        "description": "Encoding of the saved file",
        "enum": OutputFormat::iter().map(|f| f.to_string()).collect::<Vec<_>>(),
        "default": OutputFormat::default().to_string()
    })
}

/// Schema fragment for an optional caller-chosen output location.
pub(crate) fn output_path_schema() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "File name (or path inside the output directory) to save to. Defaults to a generated name."
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len_bounds() {
        assert!(check_len("prompt", "", 1, 10).is_err());
        assert!(check_len("prompt", "   ", 1, 10).is_err());
        assert!(check_len("prompt", "ok", 1, 10).is_ok());
        assert!(check_len("prompt", &"x".repeat(11), 1, 10).is_err());
        assert!(check_len("vibe", "", 0, 10).is_ok());
    }

    #[test]
    fn test_parse_size_enforces_allowed_set() {
        let size = parse_size(None, ICON_SIZES, "512x512").unwrap();
        assert_eq!(size, ImageSize::new(512, 512));
        assert!(parse_size(Some("1024x1024"), ICON_SIZES, "512x512").is_err());
    }

    #[test]
    fn test_parse_args_null_is_empty_object() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Needs {
            prompt: String,
        }
        let err = parse_args::<Needs>(Value::Null).unwrap_err();
        assert!(err.message.contains("prompt"));
    }
}
