//! Pattern registry with build-time safety validation
//!
//! All builtin patterns are validated and compiled once, up front. A pattern
//! that cannot be proven bounded is rejected with a [`PatternLoadError`]
//! rather than loaded in a degraded form, so a constructed registry always
//! scans in time proportional to input length.

use crate::error::PatternLoadError;
use crate::secrets::patterns::{Category, PatternDef, BUILTIN_PATTERNS};
use regex::{Regex, RegexBuilder};

/// Upper bound on the size of a compiled pattern, in bytes.
pub const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Upper bound on the length of a pattern source, in bytes.
pub const MAX_PATTERN_SOURCE_LEN: usize = 512;

/// A compiled, validated secret pattern.
#[derive(Debug, Clone)]
pub struct SecretPattern {
    name: &'static str,
    category: Category,
    regex: Regex,
}

impl SecretPattern {
    /// Compile a definition, enforcing the bounded-repetition rules.
    fn compile(def: &PatternDef) -> Result<Self, PatternLoadError> {
        if def.source.len() > MAX_PATTERN_SOURCE_LEN {
            return Err(PatternLoadError::SourceTooLong {
                name: def.name,
                len: def.source.len(),
                limit: MAX_PATTERN_SOURCE_LEN,
            });
        }
        validate_bounded(def.name, def.source)?;
        let regex = RegexBuilder::new(def.source)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|source| PatternLoadError::Compile {
                name: def.name,
                source,
            })?;
        Ok(SecretPattern {
            name: def.name,
            category: def.category,
            regex,
        })
    }

    /// Secret type this pattern detects, e.g. "OpenAI Key"
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Category the pattern belongs to
    pub fn category(&self) -> Category {
        self.category
    }

    /// The compiled regex
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Ordered collection of compiled secret patterns.
///
/// # Examples
///
/// ```rust
/// use aiready::secrets::PatternRegistry;
///
/// let registry = PatternRegistry::builtin().unwrap();
/// assert!(registry.get("OpenAI Key").is_some());
/// ```
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<SecretPattern>,
}

impl PatternRegistry {
    /// Build the registry from the builtin catalog.
    ///
    /// Fails if any builtin pattern violates the bounded-repetition rules
    /// or does not compile. Callers get the full catalog or nothing.
    pub fn builtin() -> Result<Self, PatternLoadError> {
        Self::from_defs(&BUILTIN_PATTERNS)
    }

    /// Build a registry from explicit definitions.
    pub fn from_defs(defs: &[PatternDef]) -> Result<Self, PatternLoadError> {
        let patterns = defs
            .iter()
            .map(SecretPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PatternRegistry { patterns })
    }

    /// All patterns, in registration order
    pub fn patterns(&self) -> &[SecretPattern] {
        &self.patterns
    }

    /// Look up a pattern by its exact name
    pub fn get(&self, name: &str) -> Option<&SecretPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the registry holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Reject repetition operators without an explicit upper bound.
///
/// `?`, `{n}`, and `{n,m}` are allowed. `*`, `+`, and `{n,}` are rejected
/// wherever they appear outside a character class or escape.
fn validate_bounded(name: &'static str, source: &str) -> Result<(), PatternLoadError> {
    let mut chars = source.char_indices().peekable();
    let mut in_class = false;
    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '*' | '+' if !in_class => {
                return Err(PatternLoadError::UnboundedQuantifier {
                    name,
                    token: c.to_string(),
                    offset,
                });
            }
            '{' if !in_class => {
                let mut body = String::new();
                while let Some((_, next)) = chars.peek() {
                    if *next == '}' {
                        break;
                    }
                    body.push(*next);
                    chars.next();
                }
                // Unterminated braces are left for the regex compiler;
                // only a well-formed open-ended counted repetition is
                // rejected here.
                if open_ended_brace(&body) {
                    return Err(PatternLoadError::UnboundedQuantifier {
                        name,
                        token: format!("{{{}}}", body),
                        offset,
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// True for `{n,}` brace bodies, false for `{n}` and `{n,m}`.
fn open_ended_brace(body: &str) -> bool {
    match body.split_once(',') {
        Some((min, "")) => !min.is_empty() && min.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}
