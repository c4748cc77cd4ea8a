//! Pictor MCP server binary.

use anyhow::Result;
use pictor_core::init_tracing;
use pictor_mcp::{
    ByteTransport, PictorRouter, Router, RouterService, Server, ServerConfig, ToolContext,
    ToolDispatcher,
};
use pictor_models::{GeminiImageClient, ImageProvider};
use pictor_security::RateLimiter;
use std::sync::Arc;
use tokio::io::{stdin, stdout};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    init_tracing(config.log_level());

    tracing::info!("Starting Pictor MCP server");

    let provider = GeminiImageClient::new(config.provider().clone())?;
    if !provider.is_configured() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; image tools will report a configuration error \
             and generate_hero will return suggested prompts"
        );
    }
    tracing::info!(
        provider = provider.name(),
        model = provider.model(),
        output_dir = %config.output_dir().display(),
        rate_limit = config.rate_limit(),
        "Provider initialized"
    );

    let limiter = Arc::new(RateLimiter::new(*config.rate_limit()));
    let context = Arc::new(ToolContext::new(
        Arc::new(provider),
        limiter,
        config.output_dir(),
        config.project_root(),
    )?);

    let router = PictorRouter::builder(ToolDispatcher::with_default_tools(context))
        .version(env!("CARGO_PKG_VERSION"))
        .build();

    tracing::info!(tools = router.list_tools().len(), "Router initialized");

    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    tracing::info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
