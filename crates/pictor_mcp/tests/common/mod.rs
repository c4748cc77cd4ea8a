//! Shared fixtures for pictor_mcp integration tests.

#![allow(dead_code)]

use pictor_core::ImagePayload;
use pictor_mcp::{ToolContext, ToolDispatcher};
use pictor_models::{ImageProvider, MockImageProvider};
use pictor_security::RateLimiter;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A 1x1 transparent PNG.
pub const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Temporary project root with a `generated` output directory.
pub struct Fixture {
    pub dir: TempDir,
    pub context: Arc<ToolContext>,
    pub dispatcher: ToolDispatcher,
}

impl Fixture {
    pub fn root(&self) -> PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("generated")
    }
}

pub fn fixture(provider: Arc<dyn ImageProvider>, rate_limit: usize) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let context = Arc::new(
        ToolContext::new(
            provider,
            Arc::new(RateLimiter::new(rate_limit)),
            dir.path().join("generated"),
            dir.path(),
        )
        .unwrap(),
    );
    let dispatcher = ToolDispatcher::with_default_tools(context.clone());
    Fixture {
        dir,
        context,
        dispatcher,
    }
}

pub fn png_mock() -> MockImageProvider {
    MockImageProvider::responding(ImagePayload::Base64(TINY_PNG_BASE64.to_string()))
}
