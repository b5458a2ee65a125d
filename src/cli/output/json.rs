//! JSON output formatting

use crate::error::AiReadyError;
use serde::Serialize;

use super::{ReportRenderer, ScanRecord, ScanRenderer};
use crate::rules::ValidationReport;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportEnvelope<'a> {
    version: &'static str,
    generated_at: String,
    verdict: &'static str,
    report: &'a ValidationReport,
}

#[derive(Serialize)]
struct ScanEnvelope<'a> {
    version: &'static str,
    generated_at: String,
    clean: bool,
    results: &'a [ScanRecord],
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &ValidationReport) -> Result<String, AiReadyError> {
        let envelope = ReportEnvelope {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: chrono::Utc::now().to_rfc3339(),
            verdict: report.verdict(),
            report,
        };

        Ok(serde_json::to_string_pretty(&envelope)?)
    }
}

impl ScanRenderer for JsonOutput {
    fn render_scan(&self, records: &[ScanRecord]) -> Result<String, AiReadyError> {
        let envelope = ScanEnvelope {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: chrono::Utc::now().to_rfc3339(),
            clean: records.iter().all(|r| r.clean),
            results: records,
        };

        Ok(serde_json::to_string_pretty(&envelope)?)
    }
}
