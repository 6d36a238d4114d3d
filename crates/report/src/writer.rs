//! Output placement with an ordered fallback chain.
//!
//! A write walks its attempts in order and stops at the first success:
//! the requested path, a timestamped sibling, the same name in the temp
//! directory, and finally (for workbooks) a CSV rendition next to the
//! requested path and in the temp directory.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::delimited::CsvRenderer;
use crate::error::{ReportError, Result};
use crate::render::{OutputFormat, Renderer};
use crate::row::Report;
use crate::xlsx::XlsxRenderer;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const FALLBACK_STEM: &str = "indice_expediente";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Workbook only.
    #[default]
    Excel,
    /// CSV only.
    Csv,
    /// Workbook plus a CSV mirror with the same basename as the written workbook.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptKind {
    Primary,
    Timestamped,
    TempDirectory,
    CsvDegraded,
}

impl fmt::Display for AttemptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "requested path",
            Self::Timestamped => "timestamped name",
            Self::TempDirectory => "temporary directory",
            Self::CsvDegraded => "CSV fallback",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attempt {
    kind: AttemptKind,
    path: PathBuf,
    degraded: bool,
}

/// A failed attempt that was recovered from by a later one.
#[derive(Debug)]
pub struct Fallback {
    pub kind: AttemptKind,
    pub path: PathBuf,
    pub error: ReportError,
}

#[derive(Debug)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub kind: AttemptKind,
    pub fallbacks: Vec<Fallback>,
}

/// Every file produced by one export, plus a mirror that could not be placed.
#[derive(Debug, Default)]
pub struct ExportOutcome {
    pub outputs: Vec<WriteOutcome>,
    pub mirror_failure: Option<ReportError>,
}

impl ExportOutcome {
    pub fn fallbacks(&self) -> impl Iterator<Item = &Fallback> {
        self.outputs.iter().flat_map(|o| o.fallbacks.iter())
    }
}

#[derive(Debug, Clone)]
pub struct ReportWriter {
    csv: CsvRenderer,
    temp_dir: PathBuf,
    timestamp: Option<DateTime<Local>>,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self {
            csv: CsvRenderer::default(),
            temp_dir: std::env::temp_dir(),
            timestamp: None,
        }
    }
}

impl ReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_csv(mut self, csv: CsvRenderer) -> Self {
        self.csv = csv;
        self
    }

    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// Pin the timestamp used for fallback names.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Write `report` according to `mode`. `output` is the requested
    /// destination; its extension is replaced to match each format.
    pub fn export(&self, report: &Report, output: &Path, mode: ExportMode) -> Result<ExportOutcome> {
        let xlsx_path = output.with_extension(OutputFormat::Xlsx.extension());
        let csv_path = output.with_extension(OutputFormat::Csv.extension());
        let mut outcome = ExportOutcome::default();

        match mode {
            ExportMode::Excel => {
                outcome.outputs.push(self.write(report, &xlsx_path, &XlsxRenderer, true)?);
            }
            ExportMode::Csv => {
                outcome.outputs.push(self.write(report, &csv_path, &self.csv, false)?);
            }
            ExportMode::Both => {
                let workbook = self.write(report, &xlsx_path, &XlsxRenderer, true)?;
                // The mirror shares the basename the workbook actually got.
                let mirror_path = workbook.path.with_extension(OutputFormat::Csv.extension());
                let degraded = workbook.format == OutputFormat::Csv;
                outcome.outputs.push(workbook);
                if degraded {
                    log::info!("workbook degraded to CSV; skipping the CSV mirror");
                } else {
                    match self.write(report, &mirror_path, &self.csv, false) {
                        Ok(mirror) => outcome.outputs.push(mirror),
                        Err(err) => {
                            log::warn!("CSV mirror could not be written: {err}");
                            outcome.mirror_failure = Some(err);
                        }
                    }
                }
            }
        }
        Ok(outcome)
    }

    /// Write with `renderer`, falling back along the chain. With `degrade`,
    /// the last resort is a CSV rendition.
    pub fn write(
        &self,
        report: &Report,
        primary: &Path,
        renderer: &dyn Renderer,
        degrade: bool,
    ) -> Result<WriteOutcome> {
        let mut fallbacks: Vec<Fallback> = Vec::new();

        for attempt in self.plan(primary, renderer.format(), degrade) {
            let active: &dyn Renderer = if attempt.degraded { &self.csv } else { renderer };
            match active.render(report, &attempt.path) {
                Ok(()) => {
                    if !fallbacks.is_empty() {
                        log::warn!(
                            "index written to {} ({}) after {} failed attempt(s)",
                            attempt.path.display(),
                            attempt.kind,
                            fallbacks.len()
                        );
                    }
                    return Ok(WriteOutcome {
                        path: attempt.path,
                        format: active.format(),
                        kind: attempt.kind,
                        fallbacks,
                    });
                }
                Err(error) => {
                    log::warn!("{} {} failed: {error}", attempt.kind, attempt.path.display());
                    fallbacks.push(Fallback {
                        kind: attempt.kind,
                        path: attempt.path,
                        error,
                    });
                }
            }
        }

        Err(ReportError::AllStrategiesFailed {
            attempts: fallbacks.into_iter().map(|f| (f.path, f.error)).collect(),
        })
    }

    fn plan(&self, primary: &Path, format: OutputFormat, degrade: bool) -> Vec<Attempt> {
        let stamp = self.timestamp.unwrap_or_else(Local::now).format(TIMESTAMP_FORMAT).to_string();
        let stem = primary
            .file_stem()
            .map_or_else(|| FALLBACK_STEM.to_string(), |s| s.to_string_lossy().into_owned());
        let stamped = |ext: &str| format!("{stem}_{stamp}.{ext}");

        let mut attempts = Vec::with_capacity(5);
        let mut push = |kind, path: PathBuf, degraded| {
            if !attempts.iter().any(|a: &Attempt| a.path == path) {
                attempts.push(Attempt { kind, path, degraded });
            }
        };

        push(AttemptKind::Primary, primary.to_path_buf(), false);
        push(AttemptKind::Timestamped, primary.with_file_name(stamped(format.extension())), false);
        push(AttemptKind::TempDirectory, self.temp_dir.join(stamped(format.extension())), false);
        if degrade && format != OutputFormat::Csv {
            let csv = OutputFormat::Csv.extension();
            push(AttemptKind::CsvDegraded, primary.with_extension(csv), true);
            push(AttemptKind::CsvDegraded, self.temp_dir.join(stamped(csv)), true);
        }
        attempts
    }
}
