//! Bot configuration
//!
//! Credentials and tunables are resolved from the environment once at
//! startup; the loop never re-reads them.

use std::time::Duration;

/// Endpoint of the homework-status API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default delay between poll cycles
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework-status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Telegram chat to deliver notifications to
    pub telegram_chat_id: String,

    /// Homework-status API endpoint
    pub endpoint: String,

    /// How often to poll for status changes
    pub poll_interval: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    pub fn from_env() -> anyhow::Result<Self> {
        let practicum_token = require_var("PRACTICUM_TOKEN")?;
        let telegram_token = require_var("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require_var("TELEGRAM_CHAT_ID")?;

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval,
        })
    }

    /// Validates the configuration
    ///
    /// Every credential must be non-empty; an invalid configuration is
    /// fatal at startup.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.practicum_token.is_empty() {
            anyhow::bail!("practicum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("telegram_token cannot be empty");
        }

        if self.telegram_chat_id.is_empty() {
            anyhow::bail!("telegram_chat_id cannot be empty");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

fn require_var(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{} environment variable not set", name))
}
