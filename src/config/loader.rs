//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AiReadyError, ConfigError};

use super::ScanConfig;

/// Name of the configuration file looked up at the project root
pub const CONFIG_FILENAME: &str = ".aiready.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Whether validate attempts fixes without the --fix flag
    #[serde(default)]
    pub auto_fix: bool,

    /// Rule identifiers to skip
    #[serde(default)]
    pub skip_rules: Vec<String>,

    /// Secret scanning configuration
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Load configuration from the project root or return default
    pub fn load_or_default(root: &Path) -> Result<Self, AiReadyError> {
        let config_path = root.join(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, AiReadyError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AiReadyError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        toml::from_str(&content).map_err(|e| AiReadyError::Config(e.into()))
    }

    /// Check if a rule is skipped by configuration
    pub fn is_rule_skipped(&self, rule_id: &str) -> bool {
        self.skip_rules.iter().any(|id| id == rule_id)
    }

    /// Check if a file should be ignored for secrets scanning
    pub fn should_ignore_file(&self, file_path: &str) -> bool {
        self.scan
            .ignore_files
            .iter()
            .any(|pattern| glob_match(pattern, file_path))
    }
}

fn glob_match(pattern: &str, text: &str) -> bool {
    // **/dir/** matches a path segment at any depth
    if pattern.starts_with("**/") && pattern.ends_with("/**") && pattern.len() > 6 {
        let middle = &pattern[3..pattern.len() - 3];
        return text.starts_with(&format!("{}/", middle))
            || text.contains(&format!("/{}/", middle));
    }

    // **/tail matches tail at any depth
    if let Some(tail) = pattern.strip_prefix("**/") {
        if glob_match(tail, text) {
            return true;
        }
        return text
            .match_indices('/')
            .any(|(i, _)| glob_match(tail, &text[i + 1..]));
    }

    // head/** matches anything under head
    if let Some(head) = pattern.strip_suffix("/**") {
        return text.starts_with(&format!("{}/", head));
    }

    if pattern.contains('*') {
        return glob_match_single_star(pattern, text);
    }

    text == pattern
}

fn glob_match_single_star(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    let mut pos = 0;

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }

        if let Some(found_pos) = text[pos..].find(part) {
            if i == 0 && found_pos != 0 {
                return false;
            }
            pos += found_pos + part.len();
        } else {
            return false;
        }
    }

    if let Some(last_part) = parts.last() {
        if !last_part.is_empty() {
            return text.ends_with(last_part);
        }
    }

    true
}
