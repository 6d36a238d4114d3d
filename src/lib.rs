// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

use crate::config::RunConfig;
use crate::error::Result;
use file_indexer_engine::entry::RunResult;
use file_indexer_report::{CsvRenderer, ExportOutcome, Report, ReportWriter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What one invocation produced.
#[derive(Debug)]
pub struct RunSummary {
    pub result: RunResult,
    pub export: ExportOutcome,
}

/// Index `config.engine.root` and write the report.
///
/// # Errors
/// Fails when the folder cannot be listed or when no output location accepted
/// the report.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    run_with_writer(config, &ReportWriter::new().with_csv(CsvRenderer::new(config.csv_delimiter)))
}

/// [`run`] with a caller-provided writer (temp directory, fixed timestamp).
///
/// # Errors
/// Same as [`run`].
pub fn run_with_writer(config: &RunConfig, writer: &ReportWriter) -> Result<RunSummary> {
    let result = file_indexer_engine::run(&config.engine)?;
    for (path, err) in &result.warnings {
        log::warn!("{}: {err}", path.display());
    }

    let report = Report::new(config.header.clone(), &result.entries);
    let export = writer.export(&report, &config.output, config.mode)?;
    Ok(RunSummary { result, export })
}
