//! # hwbot
//!
//! The notifier binary's library surface: CLI, environment configuration,
//! and the poll loop.

pub mod cli;
pub mod config;
pub mod poller;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use poller::Poller;
