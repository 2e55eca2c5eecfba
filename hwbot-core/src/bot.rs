//! Bot abstraction for sending notifications.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via
//! teloxide. The poll loop only ever sends to one fixed chat, so the trait is
//! a single operation.

use crate::error::{HwbotError, Result};
use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};

/// Abstraction for delivering a text notification to a chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`Bot`].
pub struct TelegramBot {
    bot: teloxide::Bot,
}

impl TelegramBot {
    /// Creates a bot using the given Telegram bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: teloxide::Bot::new(token.into()),
        }
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(|e| HwbotError::Delivery(e.to_string()))?;
        Ok(())
    }
}
