//! Crate-level error aggregation.

use crate::{ConfigError, PathError, ProviderError, RateLimitError, ValidationError};

/// Every failure a tool invocation can produce.
#[derive(Debug, Clone, derive_more::From)]
pub enum PictorErrorKind {
    /// Bad or missing tool arguments
    Validation(ValidationError),
    /// Credential or endpoint missing
    Config(ConfigError),
    /// Remote call or response parsing failed
    Provider(ProviderError),
    /// Tool quota exceeded
    RateLimit(RateLimitError),
    /// Path confinement or persistence failure
    Path(PathError),
}

impl std::fmt::Display for PictorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PictorErrorKind::Validation(e) => write!(f, "{}", e),
            PictorErrorKind::Config(e) => write!(f, "{}", e),
            PictorErrorKind::Provider(e) => write!(f, "{}", e),
            PictorErrorKind::RateLimit(e) => write!(f, "{}", e),
            PictorErrorKind::Path(e) => write!(f, "{}", e),
        }
    }
}

/// Pictor error with kind discrimination.
#[derive(Debug, Clone)]
pub struct PictorError(Box<PictorErrorKind>);

impl PictorError {
    /// Create a new error from a kind.
    pub fn new(kind: PictorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PictorErrorKind {
        &self.0
    }

    /// Returns true if the provider credential or endpoint is missing.
    pub fn is_config(&self) -> bool {
        matches!(self.kind(), PictorErrorKind::Config(_))
    }

    /// Message suitable for a tool response, without the source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictor_error::{PictorError, ValidationError};
    ///
    /// let err: PictorError = ValidationError::new("prompt is required").into();
    /// assert_eq!(err.user_message(), "Invalid arguments: prompt is required");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            PictorErrorKind::Validation(e) => format!("Invalid arguments: {}", e.message),
            PictorErrorKind::Config(e) => format!("Not configured: {}", e.message),
            PictorErrorKind::Provider(e) => format!("Provider error: {}", e.kind),
            PictorErrorKind::RateLimit(e) => format!(
                "Rate limit exceeded for {}: {} requests per {}s, retry in {}s",
                e.tool, e.capacity, e.window_secs, e.retry_after_secs
            ),
            PictorErrorKind::Path(e) => format!("Path error: {}", e.kind),
        }
    }
}

impl std::fmt::Display for PictorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pictor Error: {}", self.0)
    }
}

impl std::error::Error for PictorError {}

// Generic From implementation for any type that converts to PictorErrorKind
impl<T> From<T> for PictorError
where
    T: Into<PictorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Pictor operations.
pub type PictorResult<T> = std::result::Result<T, PictorError>;
