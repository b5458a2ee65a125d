//! Rule definitions
//!
//! A rule is a plain data record: an identifier, a severity, a check
//! function, and an optional fix function. Checks and fixes are free
//! functions over a shared [`RuleContext`], so the registry stays an
//! ordered list instead of a trait hierarchy.

use crate::config::Config;
use crate::project::ProjectContext;
use crate::secrets::DetectionEngine;
use serde::{Deserialize, Serialize};

/// Severity levels for validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Failures that make the project not ready.
    /// Examples: hardcoded secrets, missing CLAUDE.md.
    Error,
    /// Issues that should be addressed but do not block.
    /// Examples: missing .gitignore, empty CLAUDE.md.
    Warning,
    /// Informational suggestions for improvement.
    /// Examples: missing AGENTS.md, undocumented env variables.
    Info,
}

impl Severity {
    #[allow(dead_code)]
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "err" | "critical" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "info" | "information" | "note" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Everything a check or fix function can see.
pub struct RuleContext<'a> {
    /// The project under validation
    pub project: &'a ProjectContext,
    /// Shared secret detection engine
    pub detector: &'a DetectionEngine,
    /// Loaded configuration
    pub config: &'a Config,
}

/// Check function: `Ok(true)` passes, `Ok(false)` fails, `Err` is a rule error.
pub type CheckFn = fn(&RuleContext<'_>) -> anyhow::Result<bool>;

/// Fix function: attempts to repair the condition its rule checks.
///
/// Fixes must be idempotent. Running a fix when the check already passes
/// must leave the project unchanged.
pub type FixFn = fn(&RuleContext<'_>) -> anyhow::Result<()>;

/// A single validation rule.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    /// Stable identifier, e.g. "claude-md-exists".
    /// Used to reference the rule in configuration and --skip.
    pub id: &'static str,

    /// Short human-readable name shown in reports.
    pub name: &'static str,

    /// Category of the rule (e.g. "config", "hygiene", "secrets").
    pub category: &'static str,

    /// Severity a failed check reports at.
    pub severity: Severity,

    /// One-line description of what the rule requires.
    pub description: &'static str,

    /// The check function.
    pub check: CheckFn,

    /// Optional fix. `None` means failures can only be resolved by hand.
    pub fix: Option<FixFn>,
}

impl ValidationRule {
    /// Whether this rule carries a fix
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}
