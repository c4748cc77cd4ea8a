//! Per-tool sliding window rate limiting.

use pictor_error::RateLimitError;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Requests allowed per tool per window when not configured otherwise.
pub const DEFAULT_RATE_LIMIT: usize = 20;

/// Length of the sliding window.
pub const RATE_WINDOW: Duration = Duration::from_secs(60);

/// Sliding window rate limiter keyed by tool name.
///
/// Each tool keeps the timestamps of its accepted requests. Timestamps older
/// than the window are pruned lazily on every check. State lives for the
/// process and is not shared across instances.
#[derive(Debug, derive_getters::Getters)]
pub struct RateLimiter {
    /// Requests allowed per window
    capacity: usize,
    /// Window length
    window: Duration,
    #[getter(skip)]
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter with a 60 second window.
    pub fn new(capacity: usize) -> Self {
        Self::with_window(capacity, RATE_WINDOW)
    }

    /// Create a limiter with a custom window length.
    pub fn with_window(capacity: usize, window: Duration) -> Self {
        debug!(capacity, window_secs = window.as_secs(), "Creating rate limiter");
        Self {
            capacity,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request for `tool` now, failing if the quota is used up.
    pub async fn check(&self, tool: &str) -> Result<(), RateLimitError> {
        self.check_at(tool, Instant::now()).await
    }

    /// Record a request for `tool` at `now`.
    ///
    /// A rejected request is not recorded.
    #[instrument(skip(self, now))]
    pub async fn check_at(&self, tool: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut windows = self.windows.lock().await;
        let stamps = windows.entry(tool.to_string()).or_default();
        self.prune(stamps, now);

        if stamps.len() >= self.capacity {
            let retry_after = stamps
                .front()
                .map(|oldest| self.window.saturating_sub(now.saturating_duration_since(*oldest)))
                .unwrap_or(self.window);
            warn!(
                count = stamps.len(),
                capacity = self.capacity,
                retry_after_secs = retry_after.as_secs(),
                "Rate limit exceeded"
            );
            return Err(RateLimitError::new(
                tool,
                self.capacity,
                self.window.as_secs(),
                retry_after.as_secs().max(1),
            ));
        }

        stamps.push_back(now);
        debug!(count = stamps.len(), capacity = self.capacity, "Rate limit check passed");
        Ok(())
    }

    /// Requests still available to `tool` in the current window.
    pub async fn remaining(&self, tool: &str) -> usize {
        self.remaining_at(tool, Instant::now()).await
    }

    /// Requests still available to `tool` at `now`.
    pub async fn remaining_at(&self, tool: &str, now: Instant) -> usize {
        let mut windows = self.windows.lock().await;
        match windows.get_mut(tool) {
            Some(stamps) => {
                self.prune(stamps, now);
                self.capacity.saturating_sub(stamps.len())
            }
            None => self.capacity,
        }
    }

    fn prune(&self, stamps: &mut VecDeque<Instant>, now: Instant) {
        while let Some(oldest) = stamps.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                stamps.pop_front();
            } else {
                break;
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_LIMIT)
    }
}
