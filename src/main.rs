//! Contacts Manager - Main entry point
//!
//! Runs one interactive address-book session on stdin/stdout. Diagnostics go to
//! stderr so they never interleave with the menu.

use contacts_manager::{AppError, Config, MenuController, SessionOutcome, TerminalConsole};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::from_env();

    // RUST_LOG wins; otherwise LOG_LEVEL from config
    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return report(AppError::from(e));
        }
    };

    info!(
        path = %config.data_file_path().display(),
        "Starting contacts manager"
    );

    let mut controller = MenuController::from_config(&config, TerminalConsole::stdio());
    match controller.run() {
        Ok(SessionOutcome::Saved { count }) => {
            info!(count, "Session ended after save");
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::SetupDeclined) => {
            info!("Session ended without a data directory");
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

fn report(err: AppError) -> ExitCode {
    error!(error = %err, "Session aborted");
    eprintln!("Error: {}", err);
    ExitCode::from(err.exit_code())
}
