//! Error types for the homewatch clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the upstream services
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (connection refused, timeout, DNS)
    #[error("request to {url} failed (from_date={from_date}): {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// `from_date` query parameter of the failed request
        from_date: i64,
        /// Underlying HTTP client error
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-OK status code
    #[error("endpoint {url} returned status {status} (from_date={from_date})")]
    Endpoint {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
        /// `from_date` query parameter of the failed request
        from_date: i64,
    },

    /// Response body was not parseable as JSON
    #[error("response body is not valid JSON: {0}")]
    Format(String),

    /// Message delivery to Telegram failed
    #[error("telegram delivery failed: {0}")]
    Delivery(String),
}

impl ClientError {
    /// HTTP status code of an endpoint error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Endpoint { status, .. } => Some(*status),
            _ => None,
        }
    }
}
