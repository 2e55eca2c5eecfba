//! Homework status notifier binary: load .env, parse CLI, check settings,
//! then poll until killed.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use hwbot::{Cli, Commands, Config, Poller};
use hwbot_core::{init_tracing, TelegramBot};
use practicum_client::PracticumClient;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(Config::from_env(token)).await,
    }
}

async fn run(config: Config) -> Result<()> {
    init_tracing(&config.log_file)?;

    if !config.check_tokens() {
        let message =
            "required settings are missing: PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID must be set";
        error!("{message}");
        anyhow::bail!(message);
    }
    let chat_id = config.chat_id()?;

    let client = PracticumClient::new(config.practicum_token.clone())?;
    let bot = Arc::new(TelegramBot::new(config.telegram_token.clone()));

    Poller::new(client, bot, chat_id, config.poll_interval)
        .run()
        .await?;
    Ok(())
}
