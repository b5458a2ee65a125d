//! CLI commands module

pub mod scan;
pub mod validate;

use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Attempt to fix failing rules that carry a fix
    #[arg(long)]
    pub fix: bool,

    /// Skip specific rules by id
    #[arg(long, value_delimiter = ',', value_name = "RULE")]
    pub skip: Option<Vec<String>>,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Files to scan; reads stdin when empty
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only scan specific pattern categories
    #[arg(long, value_delimiter = ',', value_name = "CATEGORY")]
    pub categories: Option<Vec<String>>,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output format for validate and scan commands
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
