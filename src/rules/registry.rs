//! Rule registry
//!
//! Rules are held in registration order and never mutated after
//! construction. Reports list outcomes in this order, so two runs over
//! the same project produce identical output.

use crate::rules::builtin;
use crate::rules::rule::ValidationRule;

/// Ordered, immutable collection of validation rules.
pub struct RuleRegistry {
    rules: Vec<ValidationRule>,
}

impl RuleRegistry {
    /// Build the registry of builtin rules
    pub fn builtin() -> Self {
        Self::new(builtin::builtin_rules())
    }

    /// Build a registry from explicit rules
    pub fn new(rules: Vec<ValidationRule>) -> Self {
        RuleRegistry { rules }
    }

    /// All rules, in registration order
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Look up a rule by its identifier
    pub fn get(&self, id: &str) -> Option<&ValidationRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Whether a rule with this identifier is registered
    #[allow(dead_code)]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Identifiers from `ids` that name no registered rule
    pub fn unknown_ids<'a>(&self, ids: &'a [String]) -> Vec<&'a str> {
        ids.iter()
            .map(String::as_str)
            .filter(|id| self.get(id).is_none())
            .collect()
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_rule_order() {
        let registry = RuleRegistry::builtin();
        let ids: Vec<&str> = registry.rules().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "claude-md-exists",
                "claude-md-not-empty",
                "claude-md-has-sections",
                "agents-md-exists",
                "mcp-config-valid",
                "gitignore-exists",
                "gitignore-covers-env",
                "no-committed-env-file",
                "env-example-provided",
                "no-hardcoded-secrets",
            ]
        );
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let registry = RuleRegistry::builtin();
        let mut seen = HashSet::new();
        for rule in registry.rules() {
            assert!(seen.insert(rule.id), "duplicate rule id: {}", rule.id);
        }
    }

    #[test]
    fn test_get_by_id() {
        let registry = RuleRegistry::builtin();
        assert!(registry.get("claude-md-exists").is_some());
        assert!(registry.contains("no-hardcoded-secrets"));
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn test_unknown_ids() {
        let registry = RuleRegistry::builtin();
        let ids = vec![
            "claude-md-exists".to_string(),
            "bogus-rule".to_string(),
            "gitignore-exists".to_string(),
            "another-bogus".to_string(),
        ];
        assert_eq!(registry.unknown_ids(&ids), vec!["bogus-rule", "another-bogus"]);
        assert!(registry.unknown_ids(&[]).is_empty());
    }
}
