//! Main application entry point (bot binary).
//!
//! This is a thin wrapper around the `nrd_whois` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Credential loading (or console prompt on first start)
//! - Starting the Telegram dispatcher
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::process;
use teloxide::Bot;

use nrd_whois::app::{load_credentials, print_banner};
use nrd_whois::bot::run_bot;
use nrd_whois::initialization::{init_context, init_logger_with};
use nrd_whois::Config;

async fn run(config: Config) -> Result<()> {
    let credentials = load_credentials(&config).context("Failed to load bot credentials")?;
    info!("Operator user ID: {}", credentials.operator_id);

    let ctx = init_context(&config)
        .await
        .context("Failed to initialize resources")?;
    let bot = Bot::new(credentials.token);

    run_bot(bot, ctx).await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    print_banner(&config);

    if let Err(e) = run(config).await {
        eprintln!("nrd_whois error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
