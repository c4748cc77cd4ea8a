//! Output path error types.

/// Kinds of path confinement and persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PathErrorKind {
    /// Name contains a directory component or parent reference
    #[display("Path traversal rejected: {}", _0)]
    Traversal(String),
    /// Resolved path is not inside the output root
    #[display("Path escapes output directory: {}", _0)]
    OutsideRoot(String),
    /// Path does not exist or cannot be resolved
    #[display("Path not found: {}", _0)]
    NotFound(String),
    /// Output target names an existing directory
    #[display("Output path is a directory: {}", _0)]
    IsDirectory(String),
    /// I/O failure while reading or writing
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Path error with location tracking.
///
/// # Examples
///
/// ```
/// use pictor_error::{PathError, PathErrorKind};
///
/// let err = PathError::new(PathErrorKind::Traversal("../../etc/passwd".to_string()));
/// assert!(err.to_string().contains("traversal"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Path Error: {} at line {} in {}", kind, line, file)]
pub struct PathError {
    /// The kind of error that occurred
    pub kind: PathErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PathError {
    /// Create a new path error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PathErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PathErrorKind {
        &self.kind
    }
}
