//! Model Context Protocol (MCP) server for Pictor.
//!
//! Exposes image generation as MCP tools: `generate_image`, `generate_icon`,
//! `generate_hero`, `beautify_screenshot` and `server_info`. Generated files
//! are confined to a single output directory and every tool is rate limited.
//!
//! # Usage
//!
//! ```no_run
//! use pictor_mcp::{
//!     ByteTransport, PictorRouter, RouterService, Server, ServerConfig, ToolContext,
//!     ToolDispatcher,
//! };
//! use pictor_models::GeminiImageClient;
//! use pictor_security::RateLimiter;
//! use std::sync::Arc;
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let provider = Arc::new(GeminiImageClient::new(config.provider().clone())?);
//!     let limiter = Arc::new(RateLimiter::new(*config.rate_limit()));
//!     let context = Arc::new(ToolContext::new(
//!         provider,
//!         limiter,
//!         config.output_dir(),
//!         config.project_root(),
//!     )?);
//!
//!     let router = PictorRouter::builder(ToolDispatcher::with_default_tools(context)).build();
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod dispatcher;
mod error;
mod server;
mod tools;

pub use config::{DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_DIR, ServerConfig};
pub use context::ToolContext;
pub use dispatcher::ToolDispatcher;
pub use error::{McpError, McpResult};
pub use server::{PictorRouter, PictorRouterBuilder, SERVER_NAME};
pub use tools::{
    BeautifyScreenshotTool, GENERATE_SIZES, GenerateHeroTool, GenerateIconTool,
    GenerateImageTool, ICON_SIZES, IconTheme, McpTool, ServerInfoTool, ToolRegistry,
};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
