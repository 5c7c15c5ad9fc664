use crate::artifact::{check_artifact, sha256_hex, write_artifact};
use crate::catalog::load_icon_catalog;
use crate::config::{GeneratorConfig, Invocation, Mode, USAGE};
use crate::generator::{CodepointBounds, GeneratedHeader};
use crate::logging::{JsonLineLogger, LogLevel};
use anyhow::{Context, Result};
use std::env;
use std::io::Write;

const MODULE: &str = "mdi_codegen::app";

/// What a run did with the artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactOutcome {
    Written,
    UpToDate,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    pub icons: usize,
    pub bounds: CodepointBounds,
    pub duplicates: usize,
    pub sha256: String,
    pub outcome: ArtifactOutcome,
}

/// Binary entrypoint: parse `std::env::args`, log to stderr, generate.
pub fn run() -> Result<()> {
    let config = match GeneratorConfig::from_args(env::args().skip(1))? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };
    let mut logger = JsonLineLogger::stderr(config.log_level);
    run_with(&config, &mut logger)?;
    Ok(())
}

/// Runs the load, generate and write/check pipeline for `config`.
pub fn run_with<W: Write>(
    config: &GeneratorConfig,
    logger: &mut JsonLineLogger<W>,
) -> Result<GenerationReport> {
    let input = config.input.display().to_string();
    let output = config.output.display().to_string();

    let icons = load_icon_catalog(&config.input)?;
    logger.log_with(
        LogLevel::Debug,
        MODULE,
        "loaded icon catalog",
        &[("path", input.as_str()), ("icons", icons.len().to_string().as_str())],
    )?;
    if icons.is_empty() {
        logger.log_with(
            LogLevel::Warn,
            MODULE,
            "icon catalog is empty; bounds keep their initial values",
            &[("path", input.as_str())],
        )?;
    }

    let header = GeneratedHeader::build(&icons, config.duplicates)
        .with_context(|| format!("unable to generate header from {input}"))?;
    for duplicate in &header.duplicates {
        logger.log_with(
            LogLevel::Warn,
            MODULE,
            "duplicate constant identifier",
            &[
                ("identifier", duplicate.identifier.as_str()),
                ("first", duplicate.first.as_str()),
                ("second", duplicate.second.as_str()),
            ],
        )?;
    }

    let contents = header.render();
    let sha256 = sha256_hex(contents.as_bytes());
    let outcome = match config.mode {
        Mode::Write => {
            write_artifact(&config.output, &contents)?;
            ArtifactOutcome::Written
        }
        Mode::Check => {
            check_artifact(&config.output, &contents)?;
            ArtifactOutcome::UpToDate
        }
    };

    let report = GenerationReport {
        icons: header.definitions.len(),
        bounds: header.bounds,
        duplicates: header.duplicates.len(),
        sha256,
        outcome,
    };
    let message = match outcome {
        ArtifactOutcome::Written => "wrote icon header",
        ArtifactOutcome::UpToDate => "icon header is up to date",
    };
    logger.log_with(
        LogLevel::Info,
        MODULE,
        message,
        &[
            ("path", output.as_str()),
            ("icons", report.icons.to_string().as_str()),
            ("sha256", report.sha256.as_str()),
        ],
    )?;
    Ok(report)
}
