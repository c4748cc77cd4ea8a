//! Screenshot polishing advice.
//!
//! No pixels are touched. The tool confirms the screenshot lives in the
//! output directory and answers with a fixed checklist for the stated goal.

use super::McpTool;
use super::args::{check_len, output_format, output_format_schema, parse_args};
use crate::ToolContext;
use async_trait::async_trait;
use pictor_core::OutputFormat;
use pictor_error::{PathError, PathErrorKind, PictorResult};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

const MAX_GOAL_CHARS: usize = 1000;

/// Suggestions returned for every screenshot.
pub const SUGGESTED_STEPS: &[&str] = &[
    "Crop to the region that supports the goal and remove browser chrome",
    "Place the screenshot on a soft gradient or solid brand-colored canvas",
    "Add rounded corners and a subtle drop shadow",
    "Frame it in a device or window mockup if it shows an app",
    "Leave even padding on all sides and export at 2x for sharp text",
];

#[derive(Debug, Deserialize)]
struct BeautifyArgs {
    input_image_path: String,
    goal: String,
    output_format: Option<OutputFormat>,
}

/// Tool that suggests how to present a screenshot.
pub struct BeautifyScreenshotTool {
    context: Arc<ToolContext>,
}

impl BeautifyScreenshotTool {
    /// Creates the tool.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl McpTool for BeautifyScreenshotTool {
    fn name(&self) -> &str {
        "beautify_screenshot"
    }

    fn description(&self) -> &str {
        "Suggest presentation steps for a screenshot stored in the output directory, \
         given what the polished image should achieve."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "input_image_path": {
                    "type": "string",
                    "description": "Screenshot path, inside the output directory"
                },
                "goal": {
                    "type": "string",
                    "description": "What the polished screenshot should achieve",
                    "minLength": 1,
                    "maxLength": MAX_GOAL_CHARS
                },
                "output_format": output_format_schema()
            },
            "required": ["input_image_path", "goal"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> PictorResult<Value> {
        let args: BeautifyArgs = parse_args(input)?;
        check_len("goal", &args.goal, 1, MAX_GOAL_CHARS)?;
        let format = output_format(args.output_format);

        let path = self.context.guard().validate(&args.input_image_path)?;
        if !path.is_file() {
            return Err(PathError::new(PathErrorKind::NotFound(args.input_image_path)).into());
        }
        debug!(path = %path.display(), "Screenshot located");

        Ok(json!({
            "ok": true,
            "message": format!(
                "Screenshot {} is ready to polish for: {}",
                self.context.display_path(&path),
                args.goal.trim()
            ),
            "suggested_steps": SUGGESTED_STEPS,
            "note": format!(
                "No image was modified. Apply these steps in an editor and export as {}.",
                format.extension()
            ),
        }))
    }
}
