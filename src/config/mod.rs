//! Configuration module

pub mod loader;

pub use loader::{Config, CONFIG_FILENAME};

use serde::{Deserialize, Serialize};

/// Secret scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    /// Glob patterns for files the secrets rule ignores
    #[serde(default)]
    pub ignore_files: Vec<String>,

    /// Pattern categories to scan; all categories when unset
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}
