//! Homewatch Bot
//!
//! A notification bot that polls the Practicum homework-review API and
//! relays verdict changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and tunables from the environment
//! - Clients: HTTP communication with the review API and Telegram
//! - Poller: the fetch/validate/format/send cycle on a fixed period
//!
//! All state (poll cursor, dedup guard) is in-memory and resets on
//! restart.

mod config;
mod poller;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::poller::StatusPoller;
use homewatch_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homewatch_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homewatch bot");

    // Missing or empty credentials are fatal; nothing else is
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            return Err(e);
        }
    };

    info!(
        "Loaded configuration: endpoint={}, poll interval={:?}",
        config.endpoint, config.poll_interval
    );

    let source = PracticumClient::new(config.endpoint.clone(), config.practicum_token.clone());
    let notifier = TelegramClient::new(
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );

    info!("Clients initialized");

    // The poll window starts at process startup
    let cursor = Utc::now().timestamp();

    let mut poller = StatusPoller::new(config, source, notifier, cursor);

    info!("Starting polling loop");
    poller.run().await;

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config =
        Config::from_env().context("failed to load configuration from the environment")?;
    config.validate()?;
    Ok(config)
}
