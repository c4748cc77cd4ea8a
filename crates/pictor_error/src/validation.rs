//! Argument validation errors.

/// Tool arguments were missing, malformed, or outside their declared shape.
///
/// Raised before any network call is attempted.
///
/// # Examples
///
/// ```
/// use pictor_error::ValidationError;
///
/// let err = ValidationError::new("prompt must be 1-2000 characters");
/// assert!(err.to_string().contains("prompt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// What was wrong with the input
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for ValidationError {
    #[track_caller]
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        ValidationError::new(format!("missing required field '{}'", err.field_name()))
    }
}
