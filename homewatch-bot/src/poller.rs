//! Status poller
//!
//! Polls the homework-status API on a fixed period and relays verdict
//! changes to the chat. One fetch per cycle, a blocking sleep in between;
//! failures are reported to the chat and never stop the loop.

use homewatch_client::{ClientError, Notifier, StatusSource};
use homewatch_core::{Homework, ReportError, StatusReport};
use thiserror::Error;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;

/// Errors that can occur during one poll cycle
#[derive(Debug, Error)]
pub enum PollError {
    /// Fetch phase failed (transport, endpoint status, or body format)
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Validation or message-derivation phase failed
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Outcome of a single poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A new status message was delivered
    Sent(String),
    /// The derived message matched the last one sent; nothing delivered
    Unchanged,
    /// The report carried no homework records
    NoUpdate,
}

/// Status poller that continuously polls for and relays verdict changes
pub struct StatusPoller<S, N> {
    config: Config,
    source: S,
    notifier: N,
    /// Lower bound for the next fetch; advances only on a successful cycle
    cursor: i64,
    /// Last message delivered, for dedup
    last_sent: Option<String>,
}

impl<S: StatusSource, N: Notifier> StatusPoller<S, N> {
    /// Creates a new poller starting from the given cursor
    pub fn new(config: Config, source: S, notifier: N, cursor: i64) -> Self {
        Self {
            config,
            source,
            notifier,
            cursor,
            last_sent: None,
        }
    }

    /// Starts the polling loop
    ///
    /// Never returns short of process termination. A failed cycle produces
    /// one failure report through the regular delivery path; the tick that
    /// follows runs regardless of the outcome.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            match self.poll_once().await {
                Ok(PollOutcome::Sent(message)) => {
                    info!("Delivered status update: {}", message);
                }
                Ok(PollOutcome::Unchanged) => {
                    debug!("Status unchanged since last delivery");
                }
                Ok(PollOutcome::NoUpdate) => {
                    debug!("No new statuses");
                }
                Err(e) => {
                    error!("Poll cycle failed: {}", e);
                    self.deliver(&failure_message(&e)).await;
                }
            }
        }
    }

    /// Performs a single poll cycle
    ///
    /// The cursor advances to the report's `current_date` only when the
    /// whole fetch/validate/format path succeeds, so a failed window is
    /// retried on the next tick.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, PollError> {
        debug!("Polling for status changes (from_date={})", self.cursor);

        let payload = self.source.fetch_statuses(self.cursor).await?;
        let report = StatusReport::from_value(&payload)?;

        let outcome = match report.latest() {
            Some(record) => {
                let message = Homework::from_value(record)?.status_message();
                if self.deliver(&message).await {
                    PollOutcome::Sent(message)
                } else {
                    PollOutcome::Unchanged
                }
            }
            None => PollOutcome::NoUpdate,
        };

        self.cursor = report.current_date;
        Ok(outcome)
    }

    /// Best-effort delivery with dedup
    ///
    /// Returns `false` when the message equals the last one sent. An
    /// attempted delivery marks the message as sent even if Telegram
    /// rejects it; delivery failures are logged, never escalated, and
    /// there is no retry.
    async fn deliver(&mut self, message: &str) -> bool {
        if self.last_sent.as_deref() == Some(message) {
            debug!("Skipping duplicate message");
            return false;
        }

        if let Err(e) = self.notifier.notify(message).await {
            error!("Failed to deliver message: {}", e);
        }

        self.last_sent = Some(message.to_string());
        true
    }
}

/// User-facing report for one broken cycle
fn failure_message(error: &PollError) -> String {
    format!("Сбой в работе программы: {}", error)
}
