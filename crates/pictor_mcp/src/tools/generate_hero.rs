//! Landing page hero banner tool.

use super::McpTool;
use super::args::{
    GENERATE_SIZES, check_len, output_format, output_format_schema, output_path_schema,
    parse_args, parse_size,
};
use crate::ToolContext;
use async_trait::async_trait;
use pictor_core::{BackgroundMode, GenerationRequest, ImageStyle, OutputFormat};
use pictor_error::PictorResult;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

const DEFAULT_HERO_SIZE: &str = "1536x1024";
const DEFAULT_VIBE: &str = "modern, confident and inviting";

#[derive(Debug, Deserialize)]
struct GenerateHeroArgs {
    product_name: String,
    tagline: String,
    vibe: Option<String>,
    size: Option<String>,
    output_format: Option<OutputFormat>,
    output_path: Option<String>,
}

/// Build the hero banner prompt.
pub(crate) fn hero_prompt(product_name: &str, tagline: &str, vibe: Option<&str>) -> String {
    let vibe = vibe
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_VIBE);
    format!(
        "Hero banner image for the product \"{}\", conveying: {}. Mood: {}. \
         Wide cinematic composition with generous negative space for a headline; \
         do not render any text, letters or logos",
        product_name.trim(),
        tagline.trim(),
        vibe
    )
}

fn degraded(suggested_prompt: String) -> Value {
    json!({
        "ok": false,
        "suggested_prompt": suggested_prompt,
        "message": "Image generation is not configured (set GEMINI_API_KEY). \
                    Use the suggested prompt with any image generator."
    })
}

/// Tool for generating a wide hero banner for a product landing page.
///
/// Without a configured provider the tool answers with a suggested prompt
/// instead of failing.
pub struct GenerateHeroTool {
    context: Arc<ToolContext>,
}

impl GenerateHeroTool {
    /// Creates the tool.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl McpTool for GenerateHeroTool {
    fn name(&self) -> &str {
        "generate_hero"
    }

    fn description(&self) -> &str {
        "Generate a wide hero banner image for a product landing page. \
         If image generation is not configured, returns a suggested prompt instead."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "product_name": {
                    "type": "string",
                    "description": "Product name",
                    "minLength": 1,
                    "maxLength": 200
                },
                "tagline": {
                    "type": "string",
                    "description": "One-line value proposition",
                    "minLength": 1,
                    "maxLength": 500
                },
                "vibe": {
                    "type": "string",
                    "description": "Mood or visual direction (e.g. 'warm, handcrafted')",
                    "maxLength": 200
                },
                "size": {
                    "type": "string",
                    "description": "Pixel size as WxH",
                    "enum": GENERATE_SIZES,
                    "default": DEFAULT_HERO_SIZE
                },
                "output_format": output_format_schema(),
                "output_path": output_path_schema()
            },
            "required": ["product_name", "tagline"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> PictorResult<Value> {
        let args: GenerateHeroArgs = parse_args(input)?;
        check_len("product_name", &args.product_name, 1, 200)?;
        check_len("tagline", &args.tagline, 1, 500)?;
        if let Some(vibe) = &args.vibe {
            check_len("vibe", vibe, 0, 200)?;
        }
        let size = parse_size(args.size.as_deref(), GENERATE_SIZES, DEFAULT_HERO_SIZE)?;
        let prompt = hero_prompt(&args.product_name, &args.tagline, args.vibe.as_deref());

        if !self.context.provider().is_configured() {
            info!("Provider not configured, returning suggested prompt");
            return Ok(degraded(prompt));
        }

        let request = GenerationRequest::builder()
            .prompt(prompt.clone())
            .style(ImageStyle::Photo)
            .size(size)
            .background(BackgroundMode::Gradient)
            .output_format(output_format(args.output_format))
            .build()?;

        match self
            .context
            .generate_and_save(self.name(), &request, args.output_path.as_deref())
            .await
        {
            Err(e) if e.is_config() => {
                info!("Provider reported missing configuration, returning suggested prompt");
                Ok(degraded(prompt))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_prompt_defaults_vibe() {
        let prompt = hero_prompt("Acme", "Ship faster", Some("  "));
        assert!(prompt.contains("\"Acme\""));
        assert!(prompt.contains("Ship faster"));
        assert!(prompt.contains(DEFAULT_VIBE));
    }

    #[test]
    fn test_hero_prompt_uses_vibe() {
        let prompt = hero_prompt("Acme", "Ship faster", Some("warm, handcrafted"));
        assert!(prompt.contains("Mood: warm, handcrafted"));
    }
}
