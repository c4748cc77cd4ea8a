//! App and UI icon generation tool.

use super::McpTool;
use super::args::{
    ICON_SIZES, IconTheme, check_len, output_format, output_format_schema, output_path_schema,
    parse_args, parse_size,
};
use crate::ToolContext;
use async_trait::async_trait;
use pictor_core::{BackgroundMode, GenerationRequest, ImageStyle, MAX_PROMPT_CHARS, OutputFormat};
use pictor_error::PictorResult;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct GenerateIconArgs {
    concept: String,
    theme: Option<IconTheme>,
    size: Option<String>,
    output_format: Option<OutputFormat>,
    output_path: Option<String>,
}

/// Rendering guidance for an icon in `theme`.
pub(crate) fn icon_detail(theme: IconTheme) -> String {
    format!(
        "Rendered as an icon: {}, centered with even padding, legible at small sizes",
        theme.phrase()
    )
}

/// Tool for generating square icons.
pub struct GenerateIconTool {
    context: Arc<ToolContext>,
}

impl GenerateIconTool {
    /// Creates the tool.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl McpTool for GenerateIconTool {
    fn name(&self) -> &str {
        "generate_icon"
    }

    fn description(&self) -> &str {
        "Generate a square icon for a concept on a transparent background. \
         Choose a theme (minimal, playful, corporate) and a size."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "concept": {
                    "type": "string",
                    "description": "What the icon should depict",
                    "minLength": 1,
                    "maxLength": MAX_PROMPT_CHARS
                },
                "theme": {
                    "type": "string",
                    "description": "Icon theme",
                    "enum": IconTheme::iter().map(|t| t.to_string()).collect::<Vec<_>>(),
                    "default": IconTheme::default().to_string()
                },
                "size": {
                    "type": "string",
                    "description": "Pixel size as WxH",
                    "enum": ICON_SIZES,
                    "default": "512x512"
                },
                "output_format": output_format_schema(),
                "output_path": output_path_schema()
            },
            "required": ["concept"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> PictorResult<Value> {
        let args: GenerateIconArgs = parse_args(input)?;
        check_len("concept", &args.concept, 1, MAX_PROMPT_CHARS)?;
        let theme = args.theme.unwrap_or_default();
        let size = parse_size(args.size.as_deref(), ICON_SIZES, "512x512")?;

        let style = match theme {
            IconTheme::Minimal => ImageStyle::Minimal,
            IconTheme::Playful | IconTheme::Corporate => ImageStyle::Flat,
        };

        let request = GenerationRequest::builder()
            .prompt(args.concept.trim())
            .detail(icon_detail(theme))
            .style(style)
            .size(size)
            .background(BackgroundMode::Transparent)
            .output_format(output_format(args.output_format))
            .build()?;
        debug!(theme = %theme, size = %request.size(), "Built icon request");

        self.context
            .generate_and_save(self.name(), &request, args.output_path.as_deref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_detail_includes_theme_phrase() {
        let detail = icon_detail(IconTheme::Playful);
        assert!(detail.contains(IconTheme::Playful.phrase()));
    }
}
