use reqwest::StatusCode;
use serde::Deserialize;

/// Error shape the upstream attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Transport-layer failure.
///
/// The aggregation core never sees these; they surface in the view layer
/// as a dismissible alert or on the CLI's stderr.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` prefers the
    /// body's `error` field when the server sent one.
    #[error("{message} (HTTP {status})")]
    Status {
        status: StatusCode,
        message: String,
    },
    /// The request never completed (connect, DNS, decode, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a response body, preferring the
    /// server's own `error` message over the bare status line.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        ApiError::Status { status, message }
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
