//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::AiReadyError;
use crate::rules::ValidationReport;
use crate::secrets::Category;
use serde::{Deserialize, Serialize};

/// Scan result for one input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Path of the scanned input, or "<stdin>"
    pub source: String,
    /// True when no pattern matched
    pub clean: bool,
    /// Findings in pattern registration order
    pub findings: Vec<ScanFinding>,
}

/// One detected secret type within a scan record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFinding {
    /// Secret type, e.g. "OpenAI Key"
    #[serde(rename = "type")]
    pub kind: String,
    /// Category the matching pattern belongs to
    pub category: Category,
    /// Number of non-overlapping matches
    pub count: usize,
    /// 1-based line of the first match, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_line: Option<usize>,
}

/// Trait for rendering validation reports
pub trait ReportRenderer {
    fn render_report(&self, report: &ValidationReport) -> Result<String, AiReadyError>;
}

/// Trait for rendering scan results
pub trait ScanRenderer {
    fn render_scan(&self, records: &[ScanRecord]) -> Result<String, AiReadyError>;
}
