//! Errors returned by the HTTP layer.

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never got an HTTP response (offline, DNS, CORS)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Server supplied `detail` message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
