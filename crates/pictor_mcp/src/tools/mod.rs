//! MCP tools exposed by the server.

mod args;
mod beautify;
mod generate_hero;
mod generate_icon;
mod generate_image;
mod server_info;

pub use args::{GENERATE_SIZES, ICON_SIZES, IconTheme};
pub use beautify::BeautifyScreenshotTool;
pub use generate_hero::GenerateHeroTool;
pub use generate_icon::GenerateIconTool;
pub use generate_image::GenerateImageTool;
pub use server_info::ServerInfoTool;

use crate::ToolContext;
use async_trait::async_trait;
use pictor_error::PictorResult;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named, schema-described operation callable over MCP.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as listed to clients.
    fn name(&self) -> &str;

    /// Description shown to the model.
    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments.
    fn input_schema(&self) -> Value;

    /// Run the tool.
    ///
    /// Errors are converted to `{ok: false, error}` by the dispatcher.
    async fn execute(&self, input: Value) -> PictorResult<Value>;
}

/// Registry of available tools, keyed by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<BTreeMap<String, Arc<dyn McpTool>>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in tool bound to `context`.
    pub fn with_default_tools(context: Arc<ToolContext>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(GenerateImageTool::new(context.clone())));
        registry.register(Arc::new(GenerateIconTool::new(context.clone())));
        registry.register(Arc::new(GenerateHeroTool::new(context.clone())));
        registry.register(Arc::new(BeautifyScreenshotTool::new(context.clone())));
        registry.register(Arc::new(ServerInfoTool::new(context)));
        registry
    }

    /// Registers a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        Arc::make_mut(&mut self.tools).insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// All tools, ordered by name.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.tools.values().cloned().collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
