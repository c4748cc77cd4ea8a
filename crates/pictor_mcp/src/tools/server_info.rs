//! Server status tool.

use super::McpTool;
use crate::ToolContext;
use async_trait::async_trait;
use pictor_error::PictorResult;
use serde_json::{Value, json};
use std::sync::Arc;

/// Reports what this server is and how it is configured.
pub struct ServerInfoTool {
    context: Arc<ToolContext>,
}

impl ServerInfoTool {
    /// Creates the tool.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl McpTool for ServerInfoTool {
    fn name(&self) -> &str {
        "server_info"
    }

    fn description(&self) -> &str {
        "Show the server version, image provider, whether it is configured, and limits."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _input: Value) -> PictorResult<Value> {
        let provider = self.context.provider();
        Ok(json!({
            "ok": true,
            "name": crate::SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "provider": provider.name(),
            "configured": provider.is_configured(),
            "model": provider.model(),
            "rate_limit_per_minute": self.context.limiter().capacity(),
            "output_dir": self.context.display_path(self.context.guard().root()),
        }))
    }
}
