//! Client configuration.

use std::time::Duration;

/// Address of the controller the original deployment talked to. Kept only as
/// a default; real deployments pass their own base URL.
pub const DEFAULT_BASE_URL: &str = "http://192.168.100.187:5070";

/// Applied to every request so a hung controller cannot stall a caller
/// indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration for an [`FdcClient`](crate::FdcClient).
///
/// Set once at construction; the client never mutates it afterwards.
#[derive(Debug, Clone)]
pub struct FdcConfig {
    /// Base URL of the FDC HTTP service, without a trailing path.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl FdcConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FdcConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
