//! General-purpose image generation tool.

use super::McpTool;
use super::args::{
    GENERATE_SIZES, check_len, output_format, output_format_schema, output_path_schema,
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
struct GenerateImageArgs {
    prompt: String,
    style: Option<ImageStyle>,
    size: Option<String>,
    background: Option<BackgroundMode>,
    output_format: Option<OutputFormat>,
    output_path: Option<String>,
}

/// Tool for generating an image from a free-text prompt.
pub struct GenerateImageTool {
    context: Arc<ToolContext>,
}

impl GenerateImageTool {
    /// Creates the tool.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl McpTool for GenerateImageTool {
    fn name(&self) -> &str {
        "generate_image"
    }

    fn description(&self) -> &str {
        "Generate an image from a text prompt and save it to the output directory. \
         Returns the saved file path, MIME type and dimensions."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "Description of the image to generate",
                    "minLength": 1,
                    "maxLength": MAX_PROMPT_CHARS
                },
                "style": {
                    "type": "string",
                    "description": "Visual style",
                    "enum": ImageStyle::iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    "default": ImageStyle::default().to_string()
                },
                "size": {
                    "type": "string",
                    "description": "Pixel size as WxH",
                    "enum": GENERATE_SIZES,
                    "default": GENERATE_SIZES[0]
                },
                "background": {
                    "type": "string",
                    "description": "Background treatment",
                    "enum": BackgroundMode::iter().map(|b| b.to_string()).collect::<Vec<_>>(),
                    "default": BackgroundMode::default().to_string()
                },
                "output_format": output_format_schema(),
                "output_path": output_path_schema()
            },
            "required": ["prompt"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> PictorResult<Value> {
        let args: GenerateImageArgs = parse_args(input)?;
        check_len("prompt", &args.prompt, 1, MAX_PROMPT_CHARS)?;
        let size = parse_size(args.size.as_deref(), GENERATE_SIZES, GENERATE_SIZES[0])?;

        let request = GenerationRequest::builder()
            .prompt(args.prompt.trim())
            .style(args.style.unwrap_or_default())
            .size(size)
            .background(args.background.unwrap_or_default())
            .output_format(output_format(args.output_format))
            .build()?;
        debug!(style = %request.style(), size = %request.size(), "Built image request");

        self.context
            .generate_and_save(self.name(), &request, args.output_path.as_deref())
            .await
    }
}
