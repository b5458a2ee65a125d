//! Error types for aiready
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for aiready
#[derive(Error, Debug)]
pub enum AiReadyError {
    /// Pattern registry construction errors
    #[error("Pattern registry error: {0}")]
    Pattern(#[from] PatternLoadError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Project file access errors
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building the secret pattern registry.
///
/// All of these are fatal: a registry that fails to build means the
/// detection engine cannot guarantee bounded scan time, so the process
/// refuses to start rather than run with a partial catalog.
#[derive(Error, Debug)]
pub enum PatternLoadError {
    /// A pattern source contains a repetition operator with no upper bound
    #[error("pattern '{name}' uses unbounded repetition '{token}' at byte {offset}")]
    UnboundedQuantifier {
        /// Name of the offending pattern
        name: &'static str,
        /// The rejected quantifier token (`*`, `+`, or `{n,}`)
        token: String,
        /// Byte offset of the token within the pattern source
        offset: usize,
    },

    /// A pattern source exceeds the maximum allowed length
    #[error("pattern '{name}' source is {len} bytes, over the {limit} byte limit")]
    SourceTooLong {
        /// Name of the offending pattern
        name: &'static str,
        /// Actual source length in bytes
        len: usize,
        /// Maximum allowed source length
        limit: usize,
    },

    /// A pattern source failed to compile
    #[error("pattern '{name}' failed to compile: {source}")]
    Compile {
        /// Name of the offending pattern
        name: &'static str,
        /// The underlying regex error
        source: regex::Error,
    },
}

/// Errors that occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that occur while reading or writing project files
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Failed to read a file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}
