//! Rate limit error types.

/// A tool exceeded its request quota for the current window.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Rate Limit Error: {} allows {} requests per {}s, retry in {}s at line {} in {}",
    tool,
    capacity,
    window_secs,
    retry_after_secs,
    line,
    file
)]
pub struct RateLimitError {
    /// Tool whose quota was exceeded
    pub tool: String,
    /// Requests allowed per window
    pub capacity: usize,
    /// Window length in seconds
    pub window_secs: u64,
    /// Seconds until the oldest request leaves the window
    pub retry_after_secs: u64,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RateLimitError {
    /// Create a new RateLimitError with automatic location tracking.
    #[track_caller]
    pub fn new(
        tool: impl Into<String>,
        capacity: usize,
        window_secs: u64,
        retry_after_secs: u64,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            tool: tool.into(),
            capacity,
            window_secs,
            retry_after_secs,
            line: location.line(),
            file: location.file(),
        }
    }
}
