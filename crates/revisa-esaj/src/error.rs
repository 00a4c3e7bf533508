use thiserror::Error;

#[derive(Debug, Error)]
pub enum EsajError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("invalid configuration for {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus {
        status: u16,
        /// First 500 characters of the response body, for diagnostics.
        body_snippet: String,
    },

    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl EsajError {
    /// Classifies a transport-level `reqwest` failure into the taxonomy the
    /// batch layer reports on: timeouts are their own kind, everything else
    /// at the transport level is a network fault, and body-decode failures
    /// land in the catch-all.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_decode() {
            Self::Unexpected(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}
