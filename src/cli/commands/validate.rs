//! Validate command - run readiness rules against a project

use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;

use super::{OutputFormat, ValidateArgs};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::config::Config;
use crate::error::{AiReadyError, ProjectError};
use crate::project::ProjectContext;
use crate::rules::{RuleRegistry, ValidationReport, ValidationRunner};
use crate::secrets::DetectionEngine;
use crate::utils::human_duration;

pub async fn execute(
    args: ValidateArgs,
    root: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<i32, AiReadyError> {
    // Load configuration
    let config = match &config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&root)?,
    };

    let registry = RuleRegistry::builtin();

    // Reject unknown --skip ids before running anything
    if let Some(skip) = &args.skip {
        let unknown = registry.unknown_ids(skip);
        if !unknown.is_empty() {
            eprintln!(
                "{} unknown rule id(s): {}",
                "Error:".red().bold(),
                unknown.join(", ")
            );
            return Ok(exit_codes::INVALID_ARGS);
        }
    }

    let detector = DetectionEngine::builtin()?;
    let project = ProjectContext::new(root);
    let started = Instant::now();

    // The --fix flag wins over the configured default
    let auto_fix = args.fix || config.auto_fix;

    let mut runner = ValidationRunner::new(registry, detector, config);
    runner.set_auto_fix(auto_fix);
    if let Some(skip) = &args.skip {
        runner.add_skip_rules(skip);
    }

    let outcomes = runner.run(&project).await?;
    let report = ValidationReport::from_outcomes(project.project_name(), auto_fix, &outcomes);

    // Render the report
    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_report(&report)?;

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
                "{} Report written to: {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", rendered),
    }

    // Timing stays off the JSON stream so it remains parseable
    if args.format == OutputFormat::Terminal && args.output.is_none() {
        println!(
            "{} {}",
            "Completed in".dimmed(),
            human_duration(started.elapsed()).dimmed()
        );
    }

    // Return exit code based on the report
    let exit_code = if report.is_failing() {
        exit_codes::FAILURES
    } else if report.has_warnings() {
        exit_codes::WARNINGS
    } else {
        exit_codes::SUCCESS
    };

    Ok(exit_code)
}
