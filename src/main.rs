//! aiready - A CLI tool to validate and prepare repositories for AI coding assistants
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod config;
mod error;
mod project;
mod rules;
mod secrets;
mod utils;

use error::AiReadyError;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), AiReadyError> {
    // Parse CLI arguments
    let Cli {
        verbose,
        config,
        directory,
        command,
    } = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(verbose);

    let root = directory.unwrap_or_else(|| PathBuf::from("."));

    // Execute the appropriate command
    let result = match command {
        Commands::Validate(args) => cli::commands::validate::execute(args, root, config).await,
        Commands::Scan(args) => cli::commands::scan::execute(args, root, config).await,
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(cli::exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
