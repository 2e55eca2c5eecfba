//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hwbot")]
#[command(about = "Homework status notifier", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the notifier (config from env; token can override TELEGRAM_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}
