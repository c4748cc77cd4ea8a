//! In-process provider double.

use crate::ImageProvider;
use async_trait::async_trait;
use pictor_core::{GenerationRequest, GenerationResult, ImagePayload};
use pictor_error::{ConfigError, PictorResult, ProviderError, ProviderErrorKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What a [`MockImageProvider`] answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this payload
    Respond(ImagePayload),
    /// Fail with this provider error
    Fail(ProviderErrorKind),
}

/// Provider that records calls instead of touching the network.
#[derive(Debug, Clone)]
pub struct MockImageProvider {
    configured: bool,
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockImageProvider {
    /// A configured provider returning `payload` for every call.
    pub fn responding(payload: ImagePayload) -> Self {
        Self::with_behavior(true, MockBehavior::Respond(payload))
    }

    /// A configured provider failing every call with `kind`.
    pub fn failing(kind: ProviderErrorKind) -> Self {
        Self::with_behavior(true, MockBehavior::Fail(kind))
    }

    /// A provider with no credential.
    pub fn unconfigured() -> Self {
        Self::with_behavior(
            false,
            MockBehavior::Fail(ProviderErrorKind::Transport("unconfigured".to_string())),
        )
    }

    /// Build from explicit parts.
    pub fn with_behavior(configured: bool, behavior: MockBehavior) -> Self {
        Self {
            configured,
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of `generate` calls received, including unconfigured ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-image"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, request: &GenerationRequest) -> PictorResult<GenerationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if !self.configured {
            return Err(ConfigError::new("mock provider has no credential").into());
        }

        match &self.behavior {
            MockBehavior::Respond(payload) => Ok(GenerationResult::new(
                payload.clone(),
                *request.output_format(),
                *request.size().width(),
                *request.size().height(),
            )),
            MockBehavior::Fail(kind) => Err(ProviderError::new(kind.clone()).into()),
        }
    }
}
