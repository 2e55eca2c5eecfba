//! Runtime settings, read once from the environment at startup and passed
//! into each component. Secrets load as empty strings when unset; validation
//! is `check_tokens`, called exactly once before the loop starts.

use std::env;
use std::time::Duration;

use hwbot_core::{HwbotError, Result};

/// Delay between poll cycles unless POLL_INTERVAL_SECS overrides it.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Notifier settings: three secrets plus log path and poll interval.
#[derive(Debug, Clone)]
pub struct Config {
    /// PRACTICUM_TOKEN
    pub practicum_token: String,
    /// TELEGRAM_TOKEN (or the CLI --token override)
    pub telegram_token: String,
    /// TELEGRAM_CHAT_ID, kept as read; parsed by [`Config::chat_id`]
    pub telegram_chat_id: String,
    /// LOG_FILE, default `hwbot.log`
    pub log_file: String,
    /// POLL_INTERVAL_SECS, default 600
    pub poll_interval: Duration,
}

impl Config {
    /// Loads from environment variables. `token` overrides TELEGRAM_TOKEN
    /// if provided.
    pub fn from_env(token: Option<String>) -> Self {
        let practicum_token = env::var("PRACTICUM_TOKEN").unwrap_or_default();
        let telegram_token =
            token.unwrap_or_else(|| env::var("TELEGRAM_TOKEN").unwrap_or_default());
        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID").unwrap_or_default();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "hwbot.log".to_string());
        let poll_interval = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            log_file,
            poll_interval,
        }
    }

    /// True iff all three secrets are non-empty. No side effects.
    pub fn check_tokens(&self) -> bool {
        !self.practicum_token.is_empty()
            && !self.telegram_token.is_empty()
            && !self.telegram_chat_id.is_empty()
    }

    /// Parses the chat identifier into the numeric id Telegram expects.
    pub fn chat_id(&self) -> Result<i64> {
        self.telegram_chat_id.trim().parse().map_err(|_| {
            HwbotError::Config(format!(
                "TELEGRAM_CHAT_ID is not a numeric chat id: {:?}",
                self.telegram_chat_id
            ))
        })
    }
}
