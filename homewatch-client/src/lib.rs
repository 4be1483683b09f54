//! Homewatch HTTP Clients
//!
//! Type-safe clients for the two services the bot talks to: the Practicum
//! homework-review API (inbound status reports) and the Telegram Bot API
//! (outbound notifications).
//!
//! Both clients sit behind small traits ([`StatusSource`], [`Notifier`]) so
//! the polling loop can be exercised in tests without a network.
//!
//! # Example
//!
//! ```no_run
//! use homewatch_client::{PracticumClient, StatusSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "oauth-token",
//!     );
//!
//!     let payload = client.fetch_statuses(0).await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{PracticumClient, StatusSource};
pub use telegram::{Notifier, TelegramClient};
