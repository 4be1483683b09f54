//! Telegram Bot API client
//!
//! Outbound only: the bot never reads updates, it posts status
//! notifications to one fixed chat.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Base URL of the Telegram Bot API
const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Outbound message sink
///
/// Implemented by [`TelegramClient`]; test doubles collect messages instead
/// of delivering them.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one plain-text message to the configured chat
    async fn notify(&self, text: &str) -> Result<()>;
}

/// `sendMessage` request body
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// HTTP client for the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// API base URL (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// Target chat identifier
    chat_id: String,
    /// HTTP client instance
    client: reqwest::Client,
}

impl TelegramClient {
    /// Create a new client for the given bot token and chat
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(TELEGRAM_API_URL, token, chat_id)
    }

    /// Create a new client against a non-default API base URL
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| ClientError::Delivery(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Delivery(format!(
                "sendMessage returned status {}: {}",
                status.as_u16(),
                body
            )));
        }

        debug!("Delivered message to chat {}", self.chat_id);
        Ok(())
    }
}
