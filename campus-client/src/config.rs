//! Client configuration.

use std::time::Duration;

/// Address of the campus API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Per-call timeout applied to every outbound request.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Configuration fixed once when an [`ApiClient`](crate::ApiClient) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Base address that relative request paths are resolved against.
    pub base_url: String,

    /// Timeout for a whole request/response exchange, in milliseconds.
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Replace the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The per-call timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Resolve a request path against the base URL.
    ///
    /// Absolute `http://` and `https://` URLs are returned unchanged.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_owned()
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeout_ms: DEFAULT_TIMEOUT_MS }
    }
}
