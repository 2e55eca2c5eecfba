//! The poll loop: fetch, validate, format, notify, sleep, repeat.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use hwbot_core::{Bot, Result};
use practicum_client::{check_response, parse_status, PracticumClient};
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Drives the poll cycle and owns the loop's only mutable state: the
/// timestamp cursor and the last-sent message.
pub struct Poller {
    client: PracticumClient,
    bot: Arc<dyn Bot>,
    chat_id: i64,
    interval: Duration,
    cursor: i64,
    last_sent: String,
}

impl Poller {
    /// Creates a poller; the cursor starts at the current time, so only
    /// updates arriving after startup are reported.
    pub fn new(
        client: PracticumClient,
        bot: Arc<dyn Bot>,
        chat_id: i64,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            bot,
            chat_id,
            interval,
            cursor: Utc::now().timestamp(),
            last_sent: String::new(),
        }
    }

    /// Replaces the initial cursor (tests, replaying a window).
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// One poll cycle: fetch since the cursor, validate, format the most
    /// recent record, send it unless it repeats the last-sent message, then
    /// advance the cursor. The cursor only moves when the cycle got this
    /// far, so a failed window is re-queried next cycle.
    pub async fn cycle(&mut self) -> Result<()> {
        let raw = self.client.homework_statuses(self.cursor).await?;
        let page = check_response(&raw)?;

        match page.homeworks.first() {
            Some(homework) => {
                let message = parse_status(homework)?;
                if message != self.last_sent {
                    self.notify(&message).await;
                    self.last_sent = message;
                } else {
                    debug!("homework status unchanged");
                }
            }
            None => debug!("no homework updates in the window"),
        }

        if let Some(current_date) = page.current_date {
            self.cursor = current_date;
        }
        Ok(())
    }

    /// Runs one cycle and applies the recovery policy: recoverable failures
    /// are logged and reported to the chat best-effort; only fatal errors
    /// propagate.
    pub async fn tick(&mut self) -> Result<()> {
        if let Err(err) = self.cycle().await {
            if err.is_fatal() {
                return Err(err);
            }
            let alert = format!("Сбой в работе программы: {err}");
            error!(error = %err, "poll cycle failed");
            self.notify(&alert).await;
        }
        Ok(())
    }

    /// Polls forever: tick, sleep the fixed interval (success or failure),
    /// repeat. Returns only on a fatal error.
    pub async fn run(mut self) -> Result<()> {
        info!(chat_id = self.chat_id, interval_secs = self.interval.as_secs(), "poller started");
        loop {
            self.tick().await?;
            sleep(self.interval).await;
        }
    }

    /// Best-effort delivery: a failed send is logged and never propagated.
    async fn notify(&self, text: &str) {
        match self.bot.send_message(self.chat_id, text).await {
            Ok(()) => debug!(chat_id = self.chat_id, "notification delivered"),
            Err(err) => error!(error = %err, "failed to deliver notification"),
        }
    }
}
