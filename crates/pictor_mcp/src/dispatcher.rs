//! Routes tool calls through rate limiting and error conversion.

use crate::tools::ToolRegistry;
use crate::{McpError, McpResult, ToolContext};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Runs named tools and turns every tool failure into an error payload.
///
/// Order per call: name lookup, rate limit check, then the tool itself.
/// Only an unknown tool name is returned as an `Err`.
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: ToolRegistry,
    context: Arc<ToolContext>,
}

impl ToolDispatcher {
    /// Create a dispatcher over `registry`, sharing `context` with the tools.
    pub fn new(registry: ToolRegistry, context: Arc<ToolContext>) -> Self {
        Self { registry, context }
    }

    /// Dispatcher with every built-in tool registered.
    pub fn with_default_tools(context: Arc<ToolContext>) -> Self {
        let registry = ToolRegistry::with_default_tools(context.clone());
        Self::new(registry, context)
    }

    /// The registered tools.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Call `name` with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::ToolNotFound`] if no such tool is registered.
    /// Tool failures are returned as `Ok({ok: false, error})`.
    #[instrument(skip(self, args))]
    pub async fn dispatch(&self, name: &str, args: Value) -> McpResult<Value> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        if let Err(e) = self.context.limiter().check(name).await {
            warn!(tool = name, "Rate limit exceeded");
            return Ok(self.failure(e.into()));
        }

        debug!(tool = name, "Executing tool");
        match tool.execute(args).await {
            Ok(value) => {
                info!(tool = name, "Tool completed");
                Ok(value)
            }
            Err(e) => Ok(self.failure(e)),
        }
    }

    fn failure(&self, error: pictor_error::PictorError) -> Value {
        let message = self.context.provider().redact(&error.user_message());
        warn!(error = %message, "Tool failed");
        json!({
            "ok": false,
            "error": message,
        })
    }
}
