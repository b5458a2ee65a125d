//! # CLI Module
//!
//! This module defines the command-line interface for aiready using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `validate` | Run readiness rules against a project, optionally fixing issues |
//! | `scan` | Scan files or stdin for hardcoded secrets |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Output formatters (Terminal, JSON)
//!
//! ## Global Options
//!
//! All commands support these global options:
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `-C, --directory <DIR>` - Project directory (defaults to current directory)
//!
//! ## Examples
//!
//! ```bash
//! # Validate the current project
//! aiready validate
//!
//! # Validate and repair what can be repaired
//! aiready validate --fix
//!
//! # Machine-readable report for CI
//! aiready validate --format json -o report.json
//!
//! # Scan a file for secrets
//! aiready scan src/config.js
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{ScanArgs, ValidateArgs};

/// aiready - Validate and prepare repositories for AI coding assistants
#[derive(Parser, Debug)]
#[command(name = "aiready")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "AIREADY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run readiness rules against a project
    Validate(ValidateArgs),

    /// Scan files or stdin for hardcoded secrets
    Scan(ScanArgs),
}
