//! Services shared by every tool handler.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use pictor_core::{GenerationRequest, GenerationResult, ImagePayload};
use pictor_error::{PathError, PathErrorKind, PictorResult, ProviderError, ProviderErrorKind};
use pictor_models::ImageProvider;
use pictor_security::{PathGuard, RateLimiter, generate_filename};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Bound on fetching a URL payload.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared state handed to tool handlers.
///
/// Holds the single active provider, the rate limiter, and the output
/// root guard. Constructed once per process.
pub struct ToolContext {
    provider: Arc<dyn ImageProvider>,
    limiter: Arc<RateLimiter>,
    guard: PathGuard,
    http: reqwest::Client,
    project_root: PathBuf,
}

impl ToolContext {
    /// Create a context writing under `output_dir`.
    ///
    /// The output directory is created if missing. Reported file paths are
    /// relative to `project_root` when the output lies beneath it.
    pub fn new(
        provider: Arc<dyn ImageProvider>,
        limiter: Arc<RateLimiter>,
        output_dir: impl AsRef<Path>,
        project_root: impl AsRef<Path>,
    ) -> PictorResult<Self> {
        let guard = PathGuard::new(output_dir)?;
        let project_root = std::fs::canonicalize(project_root.as_ref())
            .unwrap_or_else(|_| project_root.as_ref().to_path_buf());
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Transport(e.to_string())))?;

        Ok(Self {
            provider,
            limiter,
            guard,
            http,
            project_root,
        })
    }

    /// The active image provider.
    pub fn provider(&self) -> &dyn ImageProvider {
        self.provider.as_ref()
    }

    /// The per-tool rate limiter.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// The output root guard.
    pub fn guard(&self) -> &PathGuard {
        &self.guard
    }

    /// Path as reported to callers: relative to the project root if possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Generate an image and save it, returning the success payload.
    ///
    /// A caller-supplied `output_path` is checked against the output root
    /// before the provider is called.
    #[instrument(skip(self, request, output_path))]
    pub async fn generate_and_save(
        &self,
        tool: &str,
        request: &GenerationRequest,
        output_path: Option<&str>,
    ) -> PictorResult<Value> {
        let target = output_path
            .map(|p| self.guard.resolve_output(p))
            .transpose()?;

        let result = self.provider.generate(request).await?;
        let (width, height) = (*result.width(), *result.height());
        let mime_type = result.format().mime_type();
        let path = self.persist(tool, result, target).await?;

        Ok(json!({
            "ok": true,
            "file_path": self.display_path(&path),
            "mime_type": mime_type,
            "width": width,
            "height": height,
        }))
    }

    /// Write a generation result to disk.
    ///
    /// `target` must already have passed the path guard; when absent a name
    /// is generated for `tool`. Bytes land in a temporary sibling first and
    /// are renamed onto the final name.
    #[instrument(skip(self, result, target), fields(encoding = result.payload().encoding()))]
    pub async fn persist(
        &self,
        tool: &str,
        result: GenerationResult,
        target: Option<PathBuf>,
    ) -> PictorResult<PathBuf> {
        let path = match target {
            Some(path) => path,
            None => self
                .guard
                .safe_join(&generate_filename(tool, result.format().extension()))?,
        };

        let bytes = match result.into_payload() {
            ImagePayload::Base64(data) => decode_base64(&data)?,
            ImagePayload::Url(url) => self.fetch(&url).await?,
        };

        write_then_rename(&path, &bytes).await?;
        info!(path = %path.display(), bytes = bytes.len(), "Image saved");
        Ok(path)
    }

    async fn fetch(&self, url: &str) -> PictorResult<Vec<u8>> {
        debug!(url, "Fetching image payload");
        let response = self.http.get(url).send().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::Payload(format!(
                "failed to fetch image URL: {}",
                e
            )))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Image URL returned an error");
            return Err(ProviderError::new(ProviderErrorKind::Payload(format!(
                "image URL returned HTTP {}",
                status.as_u16()
            )))
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::Payload(format!(
                "failed to read image URL body: {}",
                e
            )))
        })?;
        Ok(bytes.to_vec())
    }
}

/// Decode base64 image data, accepting an optional `data:` URL prefix.
pub(crate) fn decode_base64(data: &str) -> Result<Vec<u8>, ProviderError> {
    let encoded = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };
    let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = BASE64.decode(cleaned.as_bytes()).map_err(|e| {
        ProviderError::new(ProviderErrorKind::Payload(format!(
            "invalid base64 image data: {}",
            e
        )))
    })?;
    if bytes.is_empty() {
        return Err(ProviderError::new(ProviderErrorKind::Payload(
            "image data is empty".to_string(),
        )));
    }
    Ok(bytes)
}

async fn write_then_rename(path: &Path, bytes: &[u8]) -> Result<(), PathError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PathError::new(PathErrorKind::Traversal(path.display().to_string())))?;
    let partial = path.with_file_name(format!(".{}.partial", file_name));

    tokio::fs::write(&partial, bytes).await.map_err(|e| {
        PathError::new(PathErrorKind::Io(format!("{}: {}", partial.display(), e)))
    })?;

    if let Err(e) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(PathError::new(PathErrorKind::Io(format!(
            "{}: {}",
            path.display(),
            e
        ))));
    }
    Ok(())
}
