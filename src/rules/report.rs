//! Validation report
//!
//! Outcomes are folded into five buckets. Severity picks the bucket for
//! failed checks; rules whose check or re-check errored always land in
//! `errors`, whatever their severity, because an unevaluated rule cannot
//! be called ready. A report is failing exactly when `errors` is
//! non-empty.

use crate::rules::runner::{RuleOutcome, RuleStatus};
use crate::rules::rule::Severity;
use serde::{Deserialize, Serialize};

/// Reference to a rule inside a report bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRef {
    /// Rule identifier
    pub id: String,
    /// Human-readable rule name
    pub name: String,
    /// Rule category
    pub category: String,
    /// Failure or error detail, absent for passed and fixed rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl RuleRef {
    fn from_outcome(outcome: &RuleOutcome) -> Self {
        RuleRef {
            id: outcome.id.to_string(),
            name: outcome.name.to_string(),
            category: outcome.category.to_string(),
            detail: outcome.detail.clone(),
        }
    }
}

/// Aggregated result of a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Project name the run was performed on
    pub project: String,
    /// Whether fixes were enabled for this run
    pub auto_fix: bool,
    /// Rules whose check passed directly
    pub passed: Vec<RuleRef>,
    /// Rules repaired by a fix and confirmed by re-check
    pub fixed: Vec<RuleRef>,
    /// Error-severity failures and all errored rules
    pub errors: Vec<RuleRef>,
    /// Warning-severity failures
    pub warnings: Vec<RuleRef>,
    /// Info-severity failures
    pub info: Vec<RuleRef>,
}

impl ValidationReport {
    /// Bucket outcomes in the order they were produced
    pub fn from_outcomes(project: String, auto_fix: bool, outcomes: &[RuleOutcome]) -> Self {
        let mut report = ValidationReport {
            project,
            auto_fix,
            passed: Vec::new(),
            fixed: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            info: Vec::new(),
        };

        for outcome in outcomes {
            let rule_ref = RuleRef::from_outcome(outcome);
            match outcome.status {
                RuleStatus::Passed => report.passed.push(rule_ref),
                RuleStatus::Fixed => report.fixed.push(rule_ref),
                RuleStatus::Errored => report.errors.push(rule_ref),
                RuleStatus::Failed => match outcome.severity {
                    Severity::Error => report.errors.push(rule_ref),
                    Severity::Warning => report.warnings.push(rule_ref),
                    Severity::Info => report.info.push(rule_ref),
                },
            }
        }

        report
    }

    /// A report fails exactly when the errors bucket is non-empty
    pub fn is_failing(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any warning-severity failures remain
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total number of rule references across all buckets
    pub fn total_count(&self) -> usize {
        self.passed.len() + self.fixed.len() + self.errors.len() + self.warnings.len()
            + self.info.len()
    }

    /// Overall verdict string for output envelopes
    pub fn verdict(&self) -> &'static str {
        if self.is_failing() {
            "fail"
        } else {
            "pass"
        }
    }
}
