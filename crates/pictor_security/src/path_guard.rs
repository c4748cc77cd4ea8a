//! Output directory confinement.

use pictor_error::{PathError, PathErrorKind};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Confines file access to a single output root.
///
/// The root is canonicalized once at construction; every resolved path is
/// canonicalized again and must start with it.
#[derive(Debug, Clone)]
pub struct PathGuard {
    root: PathBuf,
}

impl PathGuard {
    /// Create a guard for `root`, creating the directory if it is missing.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn new(root: impl AsRef<Path>) -> Result<Self, PathError> {
        let root = root.as_ref();
        fs::create_dir_all(root).map_err(|e| {
            PathError::new(PathErrorKind::Io(format!(
                "cannot create output directory {}: {}",
                root.display(),
                e
            )))
        })?;
        let root = fs::canonicalize(root).map_err(|e| {
            PathError::new(PathErrorKind::Io(format!(
                "invalid output directory {}: {}",
                root.display(),
                e
            )))
        })?;
        debug!(root = %root.display(), "Output root ready");
        Ok(Self { root })
    }

    /// Canonical output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a bare file name onto the output root.
    ///
    /// Names with a directory component, a parent reference, or a NUL byte
    /// are rejected.
    #[instrument(skip(self))]
    pub fn safe_join(&self, name: &str) -> Result<PathBuf, PathError> {
        let trimmed = name.trim();
        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\', '\0'])
        {
            warn!(name, "Rejected output file name");
            return Err(PathError::new(PathErrorKind::Traversal(name.to_string())));
        }

        let candidate = self.root.join(trimmed);
        let resolved = self.canonicalize_lenient(&candidate)?;
        self.ensure_contained(&resolved, name)?;
        Ok(resolved)
    }

    /// Check that a caller-supplied path lies under the output root.
    ///
    /// Relative paths are taken relative to the root. The file itself need
    /// not exist yet, but its parent directory must.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn validate(&self, path: impl AsRef<Path>) -> Result<PathBuf, PathError> {
        let path = path.as_ref();
        let raw = path.display().to_string();
        if raw.contains('\0') {
            return Err(PathError::new(PathErrorKind::Traversal(raw)));
        }

        let candidate = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        let resolved = self.canonicalize_lenient(&candidate)?;
        self.ensure_contained(&resolved, &raw)?;
        Ok(resolved)
    }

    /// Resolve a caller-supplied output location.
    ///
    /// A single path component is treated as a file name; anything longer
    /// must already point inside the root. Existing directories are
    /// rejected since a file cannot be written over them.
    pub fn resolve_output(&self, name_or_path: &str) -> Result<PathBuf, PathError> {
        let path = Path::new(name_or_path);
        let is_bare = path.components().count() == 1
            && matches!(path.components().next(), Some(Component::Normal(_)));
        let resolved = if is_bare {
            self.safe_join(name_or_path)?
        } else {
            self.validate(path)?
        };
        if resolved.is_dir() {
            warn!(requested = name_or_path, "Output path is a directory");
            return Err(PathError::new(PathErrorKind::IsDirectory(
                name_or_path.to_string(),
            )));
        }
        Ok(resolved)
    }

    /// Canonicalize `path`, or its parent when the file does not exist yet.
    fn canonicalize_lenient(&self, path: &Path) -> Result<PathBuf, PathError> {
        if path.exists() {
            return fs::canonicalize(path).map_err(|e| {
                PathError::new(PathErrorKind::Io(format!("{}: {}", path.display(), e)))
            });
        }

        let file_name = match path.file_name() {
            Some(name) => name,
            None => {
                return Err(PathError::new(PathErrorKind::Traversal(
                    path.display().to_string(),
                )));
            }
        };
        let parent = path.parent().unwrap_or(&self.root);
        let parent = fs::canonicalize(parent).map_err(|_| {
            PathError::new(PathErrorKind::NotFound(parent.display().to_string()))
        })?;
        Ok(parent.join(file_name))
    }

    fn ensure_contained(&self, resolved: &Path, requested: &str) -> Result<(), PathError> {
        if resolved.starts_with(&self.root) && resolved != self.root {
            Ok(())
        } else {
            warn!(requested, "Path escapes output root");
            Err(PathError::new(PathErrorKind::OutsideRoot(
                requested.to_string(),
            )))
        }
    }
}
