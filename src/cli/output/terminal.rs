//! Terminal output formatting with colors

use crate::error::AiReadyError;
use colored::Colorize;

use super::{ReportRenderer, ScanRecord, ScanRenderer};
use crate::rules::{RuleRef, ValidationReport};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, project: &str) -> String {
        format!(
            r#"
{} v{}

{} {}
"#,
            "aiready".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Project:".dimmed(),
            project.white().bold()
        )
    }

    fn format_buckets(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  VALIDATION RESULTS".bold()
        ));

        if !report.errors.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "❌ ERRORS".red().bold(),
                report.errors.len()
            ));
            for rule_ref in &report.errors {
                output.push_str(&self.format_rule_ref(rule_ref));
            }
            output.push('\n');
        }

        if !report.warnings.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "⚠️  WARNINGS".yellow().bold(),
                report.warnings.len()
            ));
            for rule_ref in &report.warnings {
                output.push_str(&self.format_rule_ref(rule_ref));
            }
            output.push('\n');
        }

        if !report.info.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "ℹ️  INFO".blue().bold(),
                report.info.len()
            ));
            for rule_ref in &report.info {
                output.push_str(&self.format_rule_ref(rule_ref));
            }
            output.push('\n');
        }

        if !report.fixed.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "🔧 FIXED".green().bold(),
                report.fixed.len()
            ));
            for rule_ref in &report.fixed {
                output.push_str(&self.format_rule_ref(rule_ref));
            }
            output.push('\n');
        }

        output
    }

    fn format_rule_ref(&self, rule_ref: &RuleRef) -> String {
        let mut output = format!(
            "  {} [{}] {}\n",
            "•".dimmed(),
            rule_ref.id.cyan(),
            rule_ref.name
        );

        if let Some(detail) = &rule_ref.detail {
            output.push_str(&format!("    {} {}\n", "└─".dimmed(), detail.dimmed()));
        }

        output
    }

    fn format_summary(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        ));

        output.push_str(&format!(
            "Passed: {} │ Fixed: {} │ Errors: {} │ Warnings: {} │ Info: {}\n",
            report.passed.len().to_string().green().bold(),
            report.fixed.len().to_string().cyan().bold(),
            report.errors.len().to_string().red().bold(),
            report.warnings.len().to_string().yellow().bold(),
            report.info.len().to_string().blue().bold()
        ));

        if report.is_failing() {
            output.push_str(&format!(
                "\n{} {} error(s) must be resolved before the project is ready.\n",
                "❌".red(),
                report.errors.len()
            ));
            if !report.auto_fix {
                output.push_str(&format!(
                    "\nRun '{}' to attempt automatic fixes.\n",
                    "aiready validate --fix".cyan()
                ));
            }
        } else if report.has_warnings() {
            output.push_str(&format!(
                "\n{} Ready, with {} warning(s) worth addressing.\n",
                "⚠️ ".yellow(),
                report.warnings.len()
            ));
        } else {
            output.push_str(&format!(
                "\n{} Project is ready for AI assistants.\n",
                "✅".green()
            ));
        }

        output
    }

    fn format_scan_record(&self, record: &ScanRecord) -> String {
        if record.clean {
            return format!("{} {}\n", record.source.white().bold(), "clean".green());
        }

        let mut output = format!("{}\n", record.source.white().bold());
        for finding in &record.findings {
            output.push_str(&format!(
                "  {} [{}] {} ({} match{})\n",
                "•".dimmed(),
                finding.category.as_str().cyan(),
                finding.kind.red(),
                finding.count,
                if finding.count == 1 { "" } else { "es" }
            ));
            if let Some(line) = finding.first_line {
                output.push_str(&format!(
                    "    {} {}\n",
                    "└─".dimmed(),
                    format!("first at line {}", line).dimmed()
                ));
            }
        }
        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &ValidationReport) -> Result<String, AiReadyError> {
        let mut output = String::new();

        output.push_str(&self.format_header(&report.project));
        output.push_str(&self.format_buckets(report));
        output.push_str(&self.format_summary(report));

        Ok(output)
    }
}

impl ScanRenderer for TerminalOutput {
    fn render_scan(&self, records: &[ScanRecord]) -> Result<String, AiReadyError> {
        let mut output = String::new();

        for record in records {
            output.push_str(&self.format_scan_record(record));
        }

        let dirty = records.iter().filter(|r| !r.clean).count();
        if dirty == 0 {
            output.push_str(&format!("\n{}\n", "No secrets found.".green()));
        } else {
            output.push_str(&format!(
                "\n{}\n",
                format!("Secrets found in {} of {} input(s).", dirty, records.len())
                    .red()
                    .bold()
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::ScanFinding;
    use crate::rules::rule::Severity;
    use crate::rules::runner::{RuleOutcome, RuleStatus};
    use crate::secrets::Category;

    fn create_test_report() -> ValidationReport {
        let outcomes = vec![
            RuleOutcome {
                id: "claude-md-exists",
                name: "CLAUDE.md present",
                category: "config",
                severity: Severity::Error,
                status: RuleStatus::Passed,
                detail: None,
            },
            RuleOutcome {
                id: "gitignore-exists",
                name: ".gitignore present",
                category: "hygiene",
                severity: Severity::Warning,
                status: RuleStatus::Fixed,
                detail: None,
            },
            RuleOutcome {
                id: "no-hardcoded-secrets",
                name: "No hardcoded secrets",
                category: "secrets",
                severity: Severity::Error,
                status: RuleStatus::Failed,
                detail: Some("source files contain credential-like strings".to_string()),
            },
        ];
        ValidationReport::from_outcomes("test-app".to_string(), true, &outcomes)
    }

    #[test]
    fn test_format_header() {
        let output = TerminalOutput::new();
        let header = output.format_header("my-app");
        assert!(header.contains("my-app"));
        assert!(header.contains("aiready"));
    }

    #[test]
    fn test_render_report_lists_buckets() {
        let output = TerminalOutput::new();
        let rendered = output.render_report(&create_test_report()).unwrap();

        assert!(rendered.contains("test-app"));
        assert!(rendered.contains("ERRORS"));
        assert!(rendered.contains("no-hardcoded-secrets"));
        assert!(rendered.contains("FIXED"));
        assert!(rendered.contains("gitignore-exists"));
        assert!(rendered.contains("SUMMARY"));
        assert!(rendered.contains("error(s) must be resolved"));
    }

    #[test]
    fn test_render_report_clean() {
        let outcomes = vec![RuleOutcome {
            id: "claude-md-exists",
            name: "CLAUDE.md present",
            category: "config",
            severity: Severity::Error,
            status: RuleStatus::Passed,
            detail: None,
        }];
        let report = ValidationReport::from_outcomes("clean-app".to_string(), false, &outcomes);

        let rendered = TerminalOutput::new().render_report(&report).unwrap();
        assert!(rendered.contains("ready for AI assistants"));
        assert!(!rendered.contains("ERRORS"));
    }

    #[test]
    fn test_fix_hint_only_without_auto_fix() {
        let outcomes = vec![RuleOutcome {
            id: "claude-md-exists",
            name: "CLAUDE.md present",
            category: "config",
            severity: Severity::Error,
            status: RuleStatus::Failed,
            detail: None,
        }];

        let without_fix =
            ValidationReport::from_outcomes("app".to_string(), false, &outcomes);
        let rendered = TerminalOutput::new().render_report(&without_fix).unwrap();
        assert!(rendered.contains("validate --fix"));

        let with_fix = ValidationReport::from_outcomes("app".to_string(), true, &outcomes);
        let rendered = TerminalOutput::new().render_report(&with_fix).unwrap();
        assert!(!rendered.contains("validate --fix"));
    }

    #[test]
    fn test_render_scan_clean() {
        let records = vec![ScanRecord {
            source: "src/app.js".to_string(),
            clean: true,
            findings: vec![],
        }];
        let rendered = TerminalOutput::new().render_scan(&records).unwrap();
        assert!(rendered.contains("src/app.js"));
        assert!(rendered.contains("clean"));
        assert!(rendered.contains("No secrets found"));
    }

    #[test]
    fn test_render_scan_with_findings() {
        let records = vec![ScanRecord {
            source: "config.yml".to_string(),
            clean: false,
            findings: vec![ScanFinding {
                kind: "OpenAI Key".to_string(),
                category: Category::AiMl,
                count: 2,
                first_line: Some(7),
            }],
        }];
        let rendered = TerminalOutput::new().render_scan(&records).unwrap();

        assert!(rendered.contains("config.yml"));
        assert!(rendered.contains("OpenAI Key"));
        assert!(rendered.contains("ai_ml"));
        assert!(rendered.contains("2 matches"));
        assert!(rendered.contains("first at line 7"));
        assert!(rendered.contains("Secrets found in 1 of 1 input(s)"));
    }
}
