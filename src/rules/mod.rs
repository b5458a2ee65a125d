//! Rules module - validation rules, execution, and reporting

pub mod builtin;
pub mod registry;
pub mod report;
pub mod rule;
pub mod runner;

pub use registry::RuleRegistry;
pub use report::{RuleRef, ValidationReport};
pub use rule::{RuleContext, Severity, ValidationRule};
pub use runner::{RuleOutcome, RuleStatus, ValidationRunner};
