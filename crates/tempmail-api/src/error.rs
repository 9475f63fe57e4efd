//! Error types for API operations.

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (connect, timeout, TLS, truncated body).
    #[error("Network error. Please check your connection and try again.")]
    Network(#[from] reqwest::Error),

    /// Successful status but the body was not the expected JSON shape.
    #[error("Invalid response from server: {0}")]
    Json(#[from] serde_json::Error),

    /// Server rejected the request.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided message when present, else a status fallback.
        message: String,
    },

    /// Envelope reported success but carried no data payload.
    #[error("Response missing data payload")]
    MissingData,

    /// Endpoint URL could not be constructed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// True for transport-level failures, which display a fixed
    /// network-error message rather than server text.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status of a server rejection, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
