//! Contact Book - Main entry point
//!
//! Runs an interactive session on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{CommandContext, Config, JsonFileRepository, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // stdout carries command output, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Using address book at {} (birthday year anchor: {:?})",
        config.data_file.display(),
        config.birthday_anchor
    );

    let repository = JsonFileRepository::new(&config.data_file);
    let today = || chrono::Local::now().date_naive();

    let mut session = match Session::open(repository, CommandContext::from_config(&config, today()))
    {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout(), today)?;

    info!("Contact book shutdown complete");
    Ok(())
}
