//! Image provider error types.

/// Failure conditions of a provider call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Remote API answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Network failure or timeout before a response arrived
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// Response body was not valid JSON
    #[display("Response was not valid JSON: {}", _0)]
    InvalidJson(String),
    /// Response body matched none of the known image shapes
    #[display("No image found in response (tried {})", attempted.join(", "))]
    UnrecognizedResponse {
        /// Names of the shapes that were tried, in order
        attempted: Vec<String>,
    },
    /// Image payload could not be decoded or fetched
    #[display("Image payload error: {}", _0)]
    Payload(String),
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use pictor_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::HttpStatus {
///     status_code: 503,
///     message: "unavailable".to_string(),
/// });
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}
