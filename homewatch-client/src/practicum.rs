//! Practicum homework-status API client

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Source of homework-status payloads
///
/// Implemented by [`PracticumClient`]; test doubles stand in for it in the
/// polling-loop tests.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the raw status payload for submissions updated since
    /// `from_date` (unix timestamp, seconds)
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value>;
}

/// HTTP client for the Practicum homework-status endpoint
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Endpoint URL of the homework-status API
    endpoint: String,
    /// OAuth token sent in the Authorization header
    token: String,
    /// HTTP client instance
    client: reqwest::Client,
}

impl PracticumClient {
    /// Create a new client for the given endpoint and OAuth token
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, reqwest::Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    /// Requests `GET <endpoint>?from_date=<ts>` and returns the body as a
    /// raw JSON value; shape validation is the caller's separate step.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Fetching homework statuses (from_date={})", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                url: self.endpoint.clone(),
                from_date,
                source: e,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ClientError::Endpoint {
                status: status.as_u16(),
                url: self.endpoint.clone(),
                from_date,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Format(format!("failed to parse response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new("http://localhost:8080/statuses/", "token");
        assert_eq!(client.endpoint(), "http://localhost:8080/statuses/");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = reqwest::Client::new();
        let client = PracticumClient::with_client("http://localhost:8080", "token", http_client);
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }
}
