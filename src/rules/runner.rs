//! Rule execution
//!
//! The runner walks the registry in order and drives each rule through
//! check, optional fix, and mandatory re-check. A fix is never trusted:
//! only a passing re-check reports the rule as fixed. A rule that raises
//! an error is recorded and the run continues with the next rule.

use crate::config::Config;
use crate::error::AiReadyError;
use crate::project::ProjectContext;
use crate::rules::registry::RuleRegistry;
use crate::rules::rule::{RuleContext, Severity, ValidationRule};
use crate::secrets::DetectionEngine;
use tracing::{debug, info, span, Level};

/// Terminal status of a rule after one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStatus {
    /// Check passed on first evaluation
    Passed,
    /// Check failed, the fix ran, and the re-check passed
    Fixed,
    /// Check failed and no fix resolved it
    Failed,
    /// Check or re-check raised an error
    Errored,
}

/// Outcome of one rule
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub status: RuleStatus,
    pub detail: Option<String>,
}

/// Drives rules over a project
pub struct ValidationRunner {
    registry: RuleRegistry,
    detector: DetectionEngine,
    config: Config,
    auto_fix: bool,
    skip_rules: Vec<String>,
}

impl ValidationRunner {
    /// Create a runner; auto-fix and skips start from the configuration
    pub fn new(registry: RuleRegistry, detector: DetectionEngine, config: Config) -> Self {
        let auto_fix = config.auto_fix;
        Self {
            registry,
            detector,
            config,
            auto_fix,
            skip_rules: Vec::new(),
        }
    }

    /// Enable or disable fix attempts for failing rules
    pub fn set_auto_fix(&mut self, auto_fix: bool) {
        self.auto_fix = auto_fix;
    }

    /// Add rule identifiers to skip on top of the configured ones
    pub fn add_skip_rules(&mut self, ids: &[String]) {
        self.skip_rules.extend(ids.iter().cloned());
    }

    /// Check if a rule should be run
    fn should_run(&self, id: &str) -> bool {
        !self.config.is_rule_skipped(id) && !self.skip_rules.iter().any(|s| s == id)
    }

    /// Run all non-skipped rules and return their outcomes in registration order
    pub async fn run(&self, project: &ProjectContext) -> Result<Vec<RuleOutcome>, AiReadyError> {
        info!("Starting validation with {} rules", self.registry.len());

        let ctx = RuleContext {
            project,
            detector: &self.detector,
            config: &self.config,
        };

        let mut outcomes = Vec::new();

        for rule in self.registry.rules() {
            if !self.should_run(rule.id) {
                debug!(rule = rule.id, "Skipping rule");
                continue;
            }

            let span = span!(Level::DEBUG, "rule", id = rule.id);
            let _guard = span.enter();

            debug!(rule = rule.id, "Running rule");
            let (status, detail) = self.evaluate(rule, &ctx);
            outcomes.push(RuleOutcome {
                id: rule.id,
                name: rule.name,
                category: rule.category,
                severity: rule.severity,
                status,
                detail,
            });
        }

        info!(
            "Validation complete: {} passed, {} fixed, {} failed, {} errored",
            count_status(&outcomes, RuleStatus::Passed),
            count_status(&outcomes, RuleStatus::Fixed),
            count_status(&outcomes, RuleStatus::Failed),
            count_status(&outcomes, RuleStatus::Errored),
        );

        Ok(outcomes)
    }

    /// Drive one rule: check, then fix and re-check when enabled.
    fn evaluate(&self, rule: &ValidationRule, ctx: &RuleContext<'_>) -> (RuleStatus, Option<String>) {
        match (rule.check)(ctx) {
            Ok(true) => (RuleStatus::Passed, None),
            Ok(false) => {
                let fix = match rule.fix {
                    Some(fix) if self.auto_fix => fix,
                    _ => return (RuleStatus::Failed, Some(rule.description.to_string())),
                };

                if let Err(e) = fix(ctx) {
                    tracing::warn!(rule = rule.id, error = %e, "Fix failed");
                    return (RuleStatus::Failed, Some(format!("fix failed: {e:#}")));
                }

                // The fix only counts if the check agrees afterwards
                match (rule.check)(ctx) {
                    Ok(true) => (RuleStatus::Fixed, None),
                    Ok(false) => (
                        RuleStatus::Failed,
                        Some("fix did not resolve the check".to_string()),
                    ),
                    Err(e) => {
                        tracing::warn!(rule = rule.id, error = %e, "Re-check failed");
                        (RuleStatus::Errored, Some(format!("re-check failed: {e:#}")))
                    }
                }
            }
            Err(e) => {
                tracing::warn!(rule = rule.id, error = %e, "Check failed");
                (RuleStatus::Errored, Some(format!("check failed: {e:#}")))
            }
        }
    }
}

fn count_status(outcomes: &[RuleOutcome], status: RuleStatus) -> usize {
    outcomes.iter().filter(|o| o.status == status).count()
}
