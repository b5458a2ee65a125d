//! Scan command - scan files or stdin for hardcoded secrets

use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

use super::{OutputFormat, ScanArgs};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ScanFinding, ScanRecord, ScanRenderer, TerminalOutput};
use crate::config::Config;
use crate::error::{AiReadyError, ProjectError};
use crate::secrets::{Category, DetectionEngine};

pub async fn execute(
    args: ScanArgs,
    root: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<i32, AiReadyError> {
    // Load configuration
    let config = match &config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&root)?,
    };

    // CLI categories win over configured ones
    let requested = args.categories.or(config.scan.categories);
    let categories = match requested {
        Some(names) => {
            let mut resolved = Vec::new();
            for name in &names {
                match Category::from_string(name) {
                    Some(category) => resolved.push(category),
                    None => {
                        eprintln!(
                            "{} unknown category '{}' (expected one of: {})",
                            "Error:".red().bold(),
                            name,
                            Category::ALL.map(|c| c.as_str()).join(", ")
                        );
                        return Ok(exit_codes::INVALID_ARGS);
                    }
                }
            }
            Some(resolved)
        }
        None => None,
    };

    let detector = DetectionEngine::builtin()?;

    // Scan stdin when no paths are given
    let mut records = Vec::new();
    if args.paths.is_empty() {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).map_err(|e| {
            AiReadyError::Project(ProjectError::FileRead {
                path: "<stdin>".to_string(),
                source: e,
            })
        })?;
        records.push(scan_content(
            &detector,
            "<stdin>",
            &content,
            categories.as_deref(),
        ));
    } else {
        for path in &args.paths {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                root.join(path)
            };
            let content = std::fs::read_to_string(&resolved).map_err(|e| {
                AiReadyError::Project(ProjectError::FileRead {
                    path: resolved.display().to_string(),
                    source: e,
                })
            })?;
            records.push(scan_content(
                &detector,
                &path.display().to_string(),
                &content,
                categories.as_deref(),
            ));
        }
    }

    // Render the results
    let renderer: Box<dyn ScanRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_scan(&records)?;

    // Write output
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                AiReadyError::Project(ProjectError::FileWrite {
                    path: path.display().to_string(),
                    source: e,
                })
            })?;
            println!(
                "{} Scan results written to: {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", rendered),
    }

    // Any finding fails the scan
    let exit_code = if records.iter().all(|r| r.clean) {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURES
    };

    Ok(exit_code)
}

/// Scan one input and resolve the first match line per finding
fn scan_content(
    detector: &DetectionEngine,
    source: &str,
    content: &str,
    categories: Option<&[Category]>,
) -> ScanRecord {
    let result = detector.detect(content, categories);
    let findings = result
        .findings
        .iter()
        .map(|f| ScanFinding {
            kind: f.kind.clone(),
            category: f.category,
            count: f.count,
            first_line: detector.first_match_line(content, &f.kind),
        })
        .collect();

    ScanRecord {
        source: source.to_string(),
        clean: result.clean,
        findings,
    }
}
