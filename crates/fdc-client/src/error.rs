//! Error taxonomy for FDC calls.

use thiserror::Error;
use url::Url;

/// Failure modes of a single FDC round trip, kept distinct so the adapter
/// layer can collapse them deliberately instead of losing the cause here.
#[derive(Debug, Error)]
pub enum FdcError {
    /// Invalid client configuration (e.g. unparsable base URL).
    #[error("config error: {0}")]
    Config(String),

    /// The request never completed (connection refused, DNS, timeout).
    #[error("http transport error: {0}")]
    Transport(String),

    /// The FDC answered with a non-2xx status.
    #[error("http error: {0}")]
    Http(String),

    /// The response body does not match the wire contract.
    #[error("schema error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, FdcError>;

impl From<reqwest::Error> for FdcError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(sanitize_reqwest_error(&value))
    }
}

/// Render a URL without credentials, query, or fragment.
#[must_use]
pub fn redact_url(url: &Url) -> String {
    let mut u = url.clone();
    // Best-effort: drop credentials + query + fragment.
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.set_query(None);
    u.set_fragment(None);
    u.to_string()
}

/// Stringify a `reqwest` error with any embedded URL redacted.
#[must_use]
pub fn sanitize_reqwest_error(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        msg = msg.replace(u.as_str(), &redact_url(u));
    }
    msg
}
