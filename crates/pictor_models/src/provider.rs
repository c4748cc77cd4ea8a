//! Provider capability trait.

use async_trait::async_trait;
use pictor_core::{GenerationRequest, GenerationResult};
use pictor_error::PictorResult;

/// A backend that turns a [`GenerationRequest`] into an image.
///
/// Exactly one implementation is active per process, chosen at startup.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Short provider name for logs and `server_info`.
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Whether a credential is available.
    ///
    /// An unconfigured provider fails every `generate` call with a
    /// configuration error.
    fn is_configured(&self) -> bool;

    /// Issue one generation call.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when unconfigured, or a provider error
    /// for non-success responses and unrecognized bodies.
    async fn generate(&self, request: &GenerationRequest) -> PictorResult<GenerationResult>;

    /// Remove any secret this provider holds from `text`.
    fn redact(&self, text: &str) -> String {
        text.to_string()
    }
}
