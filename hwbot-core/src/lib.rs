//! # hwbot-core
//!
//! Core pieces of the homework notifier: the error taxonomy, tracing
//! initialization, and the [`Bot`] notification trait with its Telegram
//! implementation. API-agnostic; used by practicum-client and the hwbot binary.

pub mod bot;
pub mod error;
pub mod logger;

pub use bot::{Bot, TelegramBot};
pub use error::{HwbotError, Result};
pub use logger::init_tracing;
