//! homework-bot CLI.
//!
//! This is the main binary entry point. See the `homework_bot` library
//! for the core functionality.

use anyhow::Result;
use clap::{Parser, Subcommand};
use homework_bot::bot::poll_status;
use homework_bot::{config, constants, logging, ApiClient, Bot, Config, Notifier, TelegramClient};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI
#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(version = VERSION)]
#[command(about = "Relays homework review status changes to a Telegram chat")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll forever and notify the chat (default)
    Run {
        /// Start the first query window here instead of now (Unix seconds)
        #[arg(long)]
        from_date: Option<i64>,
    },
    /// Query once and print the status text without notifying
    Check {
        /// Start of the query window (Unix seconds, defaults to now)
        #[arg(long)]
        from_date: Option<i64>,
    },
}

/// Refuses to continue without credentials.
fn require_tokens(config: Config) -> Result<Config> {
    if !config.check_tokens() {
        log::error!(
            "CRITICAL: {} (missing: {})",
            constants::MISSING_CREDENTIALS_MESSAGE,
            config.missing_tokens().join(", ")
        );
        anyhow::bail!(constants::MISSING_CREDENTIALS_MESSAGE);
    }

    log::debug!("Loaded configuration: {config:?}");
    Ok(config)
}

fn run(config: Config, from_date: Option<i64>) -> Result<()> {
    let source = ApiClient::new(config.endpoint.clone(), config.practicum_token.clone())?;
    let telegram = TelegramClient::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
    )?;
    let notifier = Notifier::new(telegram, config.telegram_chat_id.clone());

    let cursor = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());
    let mut bot = Bot::new(source, notifier, cursor).with_retry_period(config.retry_period());

    log::info!("homework-bot v{} started", VERSION);
    bot.run()
}

fn check(config: &Config, from_date: Option<i64>) -> Result<()> {
    let source = ApiClient::new(config.endpoint.clone(), config.practicum_token.clone())?;
    let cursor = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());

    let report = poll_status(&source, cursor)?;
    match report.message {
        Some(message) => println!("{message}"),
        None => println!("{}", constants::NO_UPDATES_MESSAGE),
    }
    println!("current_date: {}", report.next_cursor);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging first, so configuration warnings reach the log file.
    let env_file = config::load_env_file()?;
    logging::init(&config::log_file_from_env())?;
    if let Some(path) = env_file {
        log::debug!("Loaded environment from {}", path.display());
    }
    let config = require_tokens(Config::from_env())?;

    match cli.command.unwrap_or(Commands::Run { from_date: None }) {
        Commands::Run { from_date } => run(config, from_date),
        Commands::Check { from_date } => check(&config, from_date),
    }
}
