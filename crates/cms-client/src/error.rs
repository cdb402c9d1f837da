//! Error types for CMS requests.

use thiserror::Error;

/// Errors returned by [`CmsClient`](crate::CmsClient) operations.
#[derive(Debug, Error)]
pub enum CmsError {
    /// The base URL or a media URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Failed to fetch {endpoint}: {source}")]
    Network {
        /// Endpoint path and query, as passed to the request helper.
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("Failed to fetch {endpoint}: {reason}")]
    Status {
        /// Endpoint path and query, as passed to the request helper.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Canonical status text, e.g. `Not Found`.
        reason: String,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path and query, as passed to the request helper.
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CmsError {
    /// HTTP status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CmsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Endpoint the failing request was sent to.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            CmsError::Network { endpoint, .. }
            | CmsError::Status { endpoint, .. }
            | CmsError::Decode { endpoint, .. } => Some(endpoint),
            CmsError::InvalidUrl(_) | CmsError::Client(_) => None,
        }
    }
}

/// Result type for CMS operations.
pub type Result<T> = std::result::Result<T, CmsError>;
