//! Builtin validation rules
//!
//! Rules are registered in the order they appear in [`builtin_rules`].
//! Earlier rules may be repaired by fixes before later rules run, so
//! ordering matters: .gitignore creation comes before the checks that
//! read it.

use crate::rules::rule::{RuleContext, Severity, ValidationRule};
use anyhow::{Context, Result};

/// Starter CLAUDE.md written by the `claude-md-exists` fix
pub const CLAUDE_MD_TEMPLATE: &str = "\
# CLAUDE.md

Guidance for AI coding assistants working in this repository.

## Project overview

Describe what this project does and how it is organized.

## Build and test

List the commands used to build, test, and lint the project.

## Conventions

Note code style, naming, and review conventions assistants should follow.
";

/// Starter AGENTS.md written by the `agents-md-exists` fix
pub const AGENTS_MD_TEMPLATE: &str = "\
# AGENTS.md

Instructions for coding agents working in this repository.

## Quick start

See CLAUDE.md for project overview, build commands, and conventions.
";

/// Starter .gitignore written by the `gitignore-exists` fix
pub const GITIGNORE_TEMPLATE: &str = "\
# Dependencies
node_modules/

# Build output
target/
dist/

# Environment files
.env
.env.*
!.env.example

# Logs
*.log
";

/// Entries the `gitignore-covers-env` rule requires
pub const ENV_IGNORE_ENTRIES: [&str; 2] = [".env", ".env.*"];

/// Environment files that must not be committed unignored
pub const ENV_FILENAMES: [&str; 5] = [
    ".env",
    ".env.local",
    ".env.production",
    ".env.development",
    ".env.test",
];

/// The builtin rules, in registration order.
pub fn builtin_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule {
            id: "claude-md-exists",
            name: "CLAUDE.md present",
            category: "config",
            severity: Severity::Error,
            description: "CLAUDE.md gives assistants project context; create one at the root",
            check: check_claude_md_exists,
            fix: Some(fix_claude_md_exists),
        },
        ValidationRule {
            id: "claude-md-not-empty",
            name: "CLAUDE.md has content",
            category: "config",
            severity: Severity::Warning,
            description: "CLAUDE.md exists but is empty; describe the project in it",
            check: check_claude_md_not_empty,
            fix: Some(fix_claude_md_not_empty),
        },
        ValidationRule {
            id: "claude-md-has-sections",
            name: "CLAUDE.md is structured",
            category: "config",
            severity: Severity::Info,
            description: "CLAUDE.md should have at least two '## ' sections",
            check: check_claude_md_has_sections,
            fix: None,
        },
        ValidationRule {
            id: "agents-md-exists",
            name: "AGENTS.md present",
            category: "config",
            severity: Severity::Info,
            description: "AGENTS.md gives agent-specific instructions; create one at the root",
            check: check_agents_md_exists,
            fix: Some(fix_agents_md_exists),
        },
        ValidationRule {
            id: "mcp-config-valid",
            name: "MCP configuration parses",
            category: "config",
            severity: Severity::Error,
            description: ".mcp.json must be a valid JSON object",
            check: check_mcp_config_valid,
            fix: None,
        },
        ValidationRule {
            id: "gitignore-exists",
            name: ".gitignore present",
            category: "hygiene",
            severity: Severity::Warning,
            description: "a .gitignore keeps build output and secrets out of history",
            check: check_gitignore_exists,
            fix: Some(fix_gitignore_exists),
        },
        ValidationRule {
            id: "gitignore-covers-env",
            name: ".gitignore covers env files",
            category: "hygiene",
            severity: Severity::Warning,
            description: ".gitignore should list .env and .env.*",
            check: check_gitignore_covers_env,
            fix: Some(fix_gitignore_covers_env),
        },
        ValidationRule {
            id: "no-committed-env-file",
            name: "No unignored env files",
            category: "secrets",
            severity: Severity::Warning,
            description: "env files exist that .gitignore does not cover",
            check: check_no_committed_env_file,
            fix: None,
        },
        ValidationRule {
            id: "env-example-provided",
            name: ".env.example documents variables",
            category: "hygiene",
            severity: Severity::Info,
            description: "projects using env files should commit a .env.example",
            check: check_env_example_provided,
            fix: None,
        },
        ValidationRule {
            id: "no-hardcoded-secrets",
            name: "No hardcoded secrets",
            category: "secrets",
            severity: Severity::Error,
            description: "source files contain credential-like strings; remove them",
            check: check_no_hardcoded_secrets,
            fix: None,
        },
    ]
}

fn check_claude_md_exists(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(ctx.project.file_exists("CLAUDE.md"))
}

fn fix_claude_md_exists(ctx: &RuleContext<'_>) -> Result<()> {
    if !ctx.project.file_exists("CLAUDE.md") {
        ctx.project
            .write_file("CLAUDE.md", CLAUDE_MD_TEMPLATE)
            .context("Failed to write CLAUDE.md")?;
    }
    Ok(())
}

fn check_claude_md_not_empty(ctx: &RuleContext<'_>) -> Result<bool> {
    if !ctx.project.file_exists("CLAUDE.md") {
        // Absence is claude-md-exists territory
        return Ok(true);
    }
    let content = ctx
        .project
        .read_file("CLAUDE.md")
        .context("Failed to read CLAUDE.md")?;
    Ok(!content.trim().is_empty())
}

fn fix_claude_md_not_empty(ctx: &RuleContext<'_>) -> Result<()> {
    if !ctx.project.file_exists("CLAUDE.md") {
        return Ok(());
    }
    let content = ctx
        .project
        .read_file("CLAUDE.md")
        .context("Failed to read CLAUDE.md")?;
    if content.trim().is_empty() {
        ctx.project
            .write_file("CLAUDE.md", CLAUDE_MD_TEMPLATE)
            .context("Failed to write CLAUDE.md")?;
    }
    Ok(())
}

fn check_claude_md_has_sections(ctx: &RuleContext<'_>) -> Result<bool> {
    if !ctx.project.file_exists("CLAUDE.md") {
        return Ok(true);
    }
    let content = ctx
        .project
        .read_file("CLAUDE.md")
        .context("Failed to read CLAUDE.md")?;
    let sections = content.lines().filter(|l| l.starts_with("## ")).count();
    Ok(sections >= 2)
}

fn check_agents_md_exists(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(ctx.project.file_exists("AGENTS.md"))
}

fn fix_agents_md_exists(ctx: &RuleContext<'_>) -> Result<()> {
    if !ctx.project.file_exists("AGENTS.md") {
        ctx.project
            .write_file("AGENTS.md", AGENTS_MD_TEMPLATE)
            .context("Failed to write AGENTS.md")?;
    }
    Ok(())
}

fn check_mcp_config_valid(ctx: &RuleContext<'_>) -> Result<bool> {
    if !ctx.project.file_exists(".mcp.json") {
        // Nothing to validate
        return Ok(true);
    }
    let content = ctx
        .project
        .read_file(".mcp.json")
        .context("Failed to read .mcp.json")?;
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => Ok(value.is_object()),
        Err(_) => Ok(false),
    }
}

fn check_gitignore_exists(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(ctx.project.file_exists(".gitignore"))
}

fn fix_gitignore_exists(ctx: &RuleContext<'_>) -> Result<()> {
    if !ctx.project.file_exists(".gitignore") {
        ctx.project
            .write_file(".gitignore", GITIGNORE_TEMPLATE)
            .context("Failed to write .gitignore")?;
    }
    Ok(())
}

fn check_gitignore_covers_env(ctx: &RuleContext<'_>) -> Result<bool> {
    if !ctx.project.file_exists(".gitignore") {
        return Ok(false);
    }
    let content = ctx
        .project
        .read_file(".gitignore")
        .context("Failed to read .gitignore")?;
    Ok(ENV_IGNORE_ENTRIES
        .iter()
        .all(|entry| entry_present(&content, entry)))
}

fn fix_gitignore_covers_env(ctx: &RuleContext<'_>) -> Result<()> {
    append_gitignore_entries(ctx, &ENV_IGNORE_ENTRIES)
}

fn check_no_committed_env_file(ctx: &RuleContext<'_>) -> Result<bool> {
    let gitignore = if ctx.project.file_exists(".gitignore") {
        ctx.project
            .read_file(".gitignore")
            .context("Failed to read .gitignore")?
    } else {
        String::new()
    };

    let mut clean = true;
    for name in ENV_FILENAMES {
        if ctx.project.file_exists(name) && !gitignore_covers(&gitignore, name) {
            tracing::warn!(file = name, "env file is not covered by .gitignore");
            clean = false;
        }
    }
    Ok(clean)
}

fn check_env_example_provided(ctx: &RuleContext<'_>) -> Result<bool> {
    let uses_env = ENV_FILENAMES.iter().any(|name| ctx.project.file_exists(name));
    if !uses_env {
        return Ok(true);
    }
    Ok(ctx.project.file_exists(".env.example"))
}

fn check_no_hardcoded_secrets(ctx: &RuleContext<'_>) -> Result<bool> {
    let mut clean = true;

    for file in ctx.project.text_files() {
        // Skip ignored files
        if ctx.config.should_ignore_file(&file.path) {
            continue;
        }

        // Unreadable files are skipped rather than failed
        if let Ok(content) = ctx.project.read_file(&file.path) {
            let result = ctx.detector.detect(&content, None);
            for finding in &result.findings {
                tracing::warn!(
                    file = %file.path,
                    kind = %finding.kind,
                    count = finding.count,
                    "secret detected"
                );
            }
            if !result.clean {
                clean = false;
            }
        }
    }

    Ok(clean)
}

/// Whether `entry` already appears as a line, treating leading and
/// trailing slashes as equivalent.
fn entry_present(content: &str, entry: &str) -> bool {
    let entry_clean = entry.trim_start_matches('/').trim_end_matches('/');
    content.lines().any(|line| {
        let line = line.trim();
        let line_clean = line.trim_start_matches('/').trim_end_matches('/');
        line == entry || line_clean == entry_clean
    })
}

/// Whether any non-negated .gitignore line matches the file `name`.
///
/// Handles literal entries plus single leading or trailing `*` wildcards,
/// which covers the entry shapes this tool writes and recommends.
fn gitignore_covers(content: &str, name: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            return false;
        }
        let line = line.trim_start_matches('/').trim_end_matches('/');
        if let Some(suffix) = line.strip_prefix('*') {
            name.ends_with(suffix)
        } else if let Some(prefix) = line.strip_suffix('*') {
            !prefix.is_empty() && name.starts_with(prefix)
        } else {
            line == name
        }
    })
}

/// Append missing entries to .gitignore, creating the file if needed.
fn append_gitignore_entries(ctx: &RuleContext<'_>, entries: &[&str]) -> Result<()> {
    let mut content = if ctx.project.file_exists(".gitignore") {
        ctx.project
            .read_file(".gitignore")
            .context("Failed to read .gitignore")?
    } else {
        String::new()
    };

    let missing: Vec<&str> = entries
        .iter()
        .copied()
        .filter(|entry| !entry_present(&content, entry))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    if !content.is_empty() {
        content.push_str("\n# Added by aiready\n");
    }
    for entry in missing {
        content.push_str(entry);
        content.push('\n');
    }

    ctx.project
        .write_file(".gitignore", &content)
        .context("Failed to write .gitignore")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::project::ProjectContext;
    use crate::secrets::DetectionEngine;
    use std::fs;
    use tempfile::TempDir;

    struct TestProject {
        _dir: TempDir,
        project: ProjectContext,
        detector: DetectionEngine,
        config: Config,
    }

    impl TestProject {
        fn new(files: &[(&str, &str)]) -> Self {
            let dir = TempDir::new().unwrap();
            for (path, content) in files {
                fs::write(dir.path().join(path), content).unwrap();
            }
            let project = ProjectContext::new(dir.path().to_path_buf());
            TestProject {
                _dir: dir,
                project,
                detector: DetectionEngine::builtin().unwrap(),
                config: Config::default(),
            }
        }

        fn ctx(&self) -> RuleContext<'_> {
            RuleContext {
                project: &self.project,
                detector: &self.detector,
                config: &self.config,
            }
        }
    }

    #[test]
    fn test_claude_md_exists_check() {
        let t = TestProject::new(&[]);
        assert!(!check_claude_md_exists(&t.ctx()).unwrap());

        let t = TestProject::new(&[("CLAUDE.md", "# CLAUDE.md")]);
        assert!(check_claude_md_exists(&t.ctx()).unwrap());
    }

    #[test]
    fn test_claude_md_exists_fix_creates_template() {
        let t = TestProject::new(&[]);
        fix_claude_md_exists(&t.ctx()).unwrap();

        let content = t.project.read_file("CLAUDE.md").unwrap();
        assert!(content.starts_with("# CLAUDE.md"));
        assert!(check_claude_md_exists(&t.ctx()).unwrap());
    }

    #[test]
    fn test_claude_md_exists_fix_preserves_existing() {
        let t = TestProject::new(&[("CLAUDE.md", "custom content")]);
        fix_claude_md_exists(&t.ctx()).unwrap();
        assert_eq!(t.project.read_file("CLAUDE.md").unwrap(), "custom content");
    }

    #[test]
    fn test_claude_md_not_empty() {
        let t = TestProject::new(&[("CLAUDE.md", "   \n\t\n")]);
        assert!(!check_claude_md_not_empty(&t.ctx()).unwrap());

        fix_claude_md_not_empty(&t.ctx()).unwrap();
        assert!(check_claude_md_not_empty(&t.ctx()).unwrap());

        // Missing file passes; that case belongs to claude-md-exists
        let t = TestProject::new(&[]);
        assert!(check_claude_md_not_empty(&t.ctx()).unwrap());
    }

    #[test]
    fn test_claude_md_has_sections() {
        let t = TestProject::new(&[("CLAUDE.md", "# Title\n\n## One\n\n## Two\n")]);
        assert!(check_claude_md_has_sections(&t.ctx()).unwrap());

        let t = TestProject::new(&[("CLAUDE.md", "# Title\n\n## Only\n")]);
        assert!(!check_claude_md_has_sections(&t.ctx()).unwrap());

        let t = TestProject::new(&[]);
        assert!(check_claude_md_has_sections(&t.ctx()).unwrap());
    }

    #[test]
    fn test_template_satisfies_section_check() {
        let t = TestProject::new(&[]);
        fix_claude_md_exists(&t.ctx()).unwrap();
        assert!(check_claude_md_has_sections(&t.ctx()).unwrap());
        assert!(check_claude_md_not_empty(&t.ctx()).unwrap());
    }

    #[test]
    fn test_mcp_config_valid() {
        let t = TestProject::new(&[]);
        assert!(check_mcp_config_valid(&t.ctx()).unwrap());

        let t = TestProject::new(&[(".mcp.json", r#"{"mcpServers": {}}"#)]);
        assert!(check_mcp_config_valid(&t.ctx()).unwrap());

        let t = TestProject::new(&[(".mcp.json", "{not json")]);
        assert!(!check_mcp_config_valid(&t.ctx()).unwrap());

        // Valid JSON but not an object
        let t = TestProject::new(&[(".mcp.json", "[1, 2]")]);
        assert!(!check_mcp_config_valid(&t.ctx()).unwrap());
    }

    #[test]
    fn test_gitignore_exists_fix() {
        let t = TestProject::new(&[]);
        assert!(!check_gitignore_exists(&t.ctx()).unwrap());

        fix_gitignore_exists(&t.ctx()).unwrap();
        assert!(check_gitignore_exists(&t.ctx()).unwrap());

        // Template already covers env entries
        assert!(check_gitignore_covers_env(&t.ctx()).unwrap());
    }

    #[test]
    fn test_gitignore_covers_env_fix_appends() {
        let t = TestProject::new(&[(".gitignore", "node_modules/\n")]);
        assert!(!check_gitignore_covers_env(&t.ctx()).unwrap());

        fix_gitignore_covers_env(&t.ctx()).unwrap();
        assert!(check_gitignore_covers_env(&t.ctx()).unwrap());

        let content = t.project.read_file(".gitignore").unwrap();
        assert!(content.contains("# Added by aiready"));
        assert!(content.contains("node_modules/"));
        assert_eq!(content.matches(".env.*").count(), 1);
    }

    #[test]
    fn test_gitignore_covers_env_fix_is_idempotent() {
        let t = TestProject::new(&[(".gitignore", "node_modules/\n")]);
        fix_gitignore_covers_env(&t.ctx()).unwrap();
        let first = t.project.read_file(".gitignore").unwrap();

        fix_gitignore_covers_env(&t.ctx()).unwrap();
        let second = t.project.read_file(".gitignore").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_committed_env_file() {
        let t = TestProject::new(&[(".env", "SECRET=1\n")]);
        assert!(!check_no_committed_env_file(&t.ctx()).unwrap());

        let t = TestProject::new(&[(".env", "SECRET=1\n"), (".gitignore", ".env\n")]);
        assert!(check_no_committed_env_file(&t.ctx()).unwrap());

        // .env.local needs the wildcard entry
        let t = TestProject::new(&[(".env.local", "SECRET=1\n"), (".gitignore", ".env\n")]);
        assert!(!check_no_committed_env_file(&t.ctx()).unwrap());

        let t = TestProject::new(&[(".env.local", "SECRET=1\n"), (".gitignore", ".env.*\n")]);
        assert!(check_no_committed_env_file(&t.ctx()).unwrap());

        let t = TestProject::new(&[]);
        assert!(check_no_committed_env_file(&t.ctx()).unwrap());
    }

    #[test]
    fn test_env_example_provided() {
        let t = TestProject::new(&[]);
        assert!(check_env_example_provided(&t.ctx()).unwrap());

        let t = TestProject::new(&[(".env", "A=1\n")]);
        assert!(!check_env_example_provided(&t.ctx()).unwrap());

        let t = TestProject::new(&[(".env", "A=1\n"), (".env.example", "A=\n")]);
        assert!(check_env_example_provided(&t.ctx()).unwrap());
    }

    #[test]
    fn test_no_hardcoded_secrets() {
        let t = TestProject::new(&[(
            "app.js",
            "const key = \"sk-1234567890abcdefghijklmnopqrstuvwxyz12345678\";\n",
        )]);
        assert!(!check_no_hardcoded_secrets(&t.ctx()).unwrap());

        let t = TestProject::new(&[("app.js", "const version = \"1.0.0\";\n")]);
        assert!(check_no_hardcoded_secrets(&t.ctx()).unwrap());
    }

    #[test]
    fn test_no_hardcoded_secrets_skips_non_source_files() {
        // Keys in markdown documentation are out of scope
        let t = TestProject::new(&[(
            "README.md",
            "Example: sk-1234567890abcdefghijklmnopqrstuvwxyz12345678\n",
        )]);
        assert!(check_no_hardcoded_secrets(&t.ctx()).unwrap());
    }

    #[test]
    fn test_no_hardcoded_secrets_respects_ignore_globs() {
        let t = TestProject::new(&[(
            "fixture.js",
            "const key = \"sk-1234567890abcdefghijklmnopqrstuvwxyz12345678\";\n",
        )]);
        let mut config = Config::default();
        config.scan.ignore_files.push("*.js".to_string());
        let ctx = RuleContext {
            project: &t.project,
            detector: &t.detector,
            config: &config,
        };
        assert!(check_no_hardcoded_secrets(&ctx).unwrap());
    }

    #[test]
    fn test_entry_present_slash_variants() {
        assert!(entry_present("dir/\n", "dir"));
        assert!(entry_present("/dir\n", "dir"));
        assert!(entry_present("dir\n", "dir/"));
        assert!(!entry_present("directory\n", "dir"));
    }

    #[test]
    fn test_gitignore_covers() {
        assert!(gitignore_covers(".env\n", ".env"));
        assert!(gitignore_covers(".env.*\n", ".env.local"));
        assert!(gitignore_covers("*.env\n", ".env"));
        assert!(gitignore_covers("/.env\n", ".env"));
        assert!(!gitignore_covers("# .env\n", ".env"));
        assert!(!gitignore_covers("!.env\n", ".env"));
        assert!(!gitignore_covers(".env\n", ".env.local"));
        assert!(!gitignore_covers("", ".env"));
    }
}
