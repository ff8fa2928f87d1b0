//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_scanner` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;

use domain_scanner::initialization::init_logger_with;
use domain_scanner::{run_scan, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, then from next to the executable,
    // so RUST_LOG can be set there
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

    let cli = Cli::parse();
    if !cli.has_operation() {
        Cli::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(());
    }

    let config = Config::from(cli);
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_scan(config).await {
        Ok(report) => {
            println!("{}", report.summary_line());
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_scanner error: {:#}", e);
            process::exit(1);
        }
    }
}
