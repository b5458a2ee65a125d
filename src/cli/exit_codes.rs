//! Exit codes for the CLI
//!
//! Standard exit codes used by the aiready CLI for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Validation passed, scan found nothing |
//! | 1 | `FAILURES` | Failing issues | Hardcoded secrets, unresolved error rules |
//! | 2 | `WARNINGS` | Warnings only | Missing .gitignore entries |
//! | 3 | `ERROR` | Runtime error | Unreadable file, invalid configuration |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Unknown rule id, unknown category |
//!
//! # Usage
//!
//! ```rust,ignore
//! use aiready::cli::exit_codes;
//!
//! // Return success
//! std::process::exit(exit_codes::SUCCESS);
//!
//! // Return failing issues
//! std::process::exit(exit_codes::FAILURES);
//! ```

/// Success - no issues found or operation completed successfully.
///
/// Used when:
/// - Validation completed with an empty errors bucket
/// - Scan found no secrets
pub const SUCCESS: i32 = 0;

/// Failing issues detected.
///
/// Used when:
/// - The validation report has a non-empty errors bucket
/// - A scan found at least one secret
pub const FAILURES: i32 = 1;

/// Warning issues detected, nothing failing.
///
/// Used when:
/// - Warning-severity rules failed but no error-severity ones did
pub const WARNINGS: i32 = 2;

/// Runtime error (file not found, invalid configuration, etc.).
///
/// Used when:
/// - Configuration file not found or invalid
/// - A requested input file cannot be read
/// - The pattern registry fails to build
pub const ERROR: i32 = 3;

/// Invalid arguments (unknown rule id, unknown category, etc.).
///
/// Used when:
/// - --skip names a rule that is not registered
/// - --categories names an unknown pattern category
pub const INVALID_ARGS: i32 = 4;
