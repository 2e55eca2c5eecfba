//! Mock implementation of [`hwbot_core::Bot`] for poller tests.
//!
//! Records every `send_message` call so tests can assert on delivery counts
//! and message text without hitting Telegram; can be made to fail every send
//! to exercise the best-effort delivery path.

use async_trait::async_trait;
use hwbot_core::{Bot, HwbotError, Result};
use std::sync::{Arc, Mutex};

/// Mock Bot that records `(chat_id, text)` for each send.
pub struct MockBot {
    sent: Mutex<Vec<(i64, String)>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    /// A bot whose every send fails after being recorded.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    /// All recorded sends, in order.
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        if self.fail {
            return Err(HwbotError::Delivery("mock delivery failure".into()));
        }
        Ok(())
    }
}
