//! MCP server implementation.

use crate::ToolDispatcher;
use mcp_server::Router;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    protocol::ServerCapabilities,
    prompt::Prompt,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, instrument};

/// Server name reported over MCP.
pub const SERVER_NAME: &str = "pictor";

/// MCP server for Pictor implementing the Router trait.
#[derive(Clone)]
pub struct PictorRouter {
    name: String,
    version: String,
    dispatcher: ToolDispatcher,
}

impl PictorRouter {
    /// Creates a new router builder.
    pub fn builder(dispatcher: ToolDispatcher) -> PictorRouterBuilder {
        PictorRouterBuilder::new(dispatcher)
    }

    /// The dispatcher tool calls are routed through.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }
}

impl Router for PictorRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "Pictor MCP Server v{}\n\n\
            Generates images (general images, icons, landing page hero banners) with a remote \
            image model and saves them under the project's output directory. Every result is \
            JSON with an `ok` flag; failures carry an `error` message.\n\n\
            Available tools: {}",
            self.version,
            self.dispatcher
                .registry()
                .list()
                .iter()
                .map(|t| t.name().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new().with_tools(false).build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.dispatcher
            .registry()
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, "Tool called");

        let dispatcher = self.dispatcher.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            match dispatcher.dispatch(&tool_name, arguments).await {
                Ok(result) => {
                    let text = serde_json::to_string_pretty(&result)
                        .unwrap_or_else(|_| result.to_string());
                    Ok(vec![Content::text(text)])
                }
                Err(e) => {
                    debug!(tool = %tool_name, error = %e, "Tool dispatch failed");
                    Err(ToolError::ExecutionError(e.to_string()))
                }
            }
        })
    }

    fn list_resources(&self) -> Vec<Resource> {
        vec![]
    }

    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        let uri = uri.to_string();
        Box::pin(async move { Err(ResourceError::NotFound(format!("Resource {} not found", uri))) })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        vec![]
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let prompt_name = prompt_name.to_string();
        Box::pin(async move { Err(PromptError::NotFound(format!("Prompt {} not found", prompt_name))) })
    }
}

/// Builder for the Pictor MCP router.
pub struct PictorRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    dispatcher: ToolDispatcher,
}

impl PictorRouterBuilder {
    /// Starts a builder around `dispatcher`.
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            name: None,
            version: None,
            dispatcher,
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builds the router.
    pub fn build(self) -> PictorRouter {
        PictorRouter {
            name: self.name.unwrap_or_else(|| SERVER_NAME.to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            dispatcher: self.dispatcher,
        }
    }
}
