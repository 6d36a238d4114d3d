// src/config.rs
use crate::args::{Args, FormatArg};
use crate::error::{AppError, Result};
use file_indexer_engine::config::{Config, ConfigBuilder, PdfOptionsBuilder, ScanOptionsBuilder};
use file_indexer_engine::pdf::PdfCapabilities;
use file_indexer_report::{ExportMode, HeaderTemplate, OutputFormat};
use std::path::{Path, PathBuf};

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub engine: Config,
    /// Requested destination with the extension of the main format.
    pub output: PathBuf,
    pub mode: ExportMode,
    pub header: HeaderTemplate,
    pub csv_delimiter: char,
}

impl From<FormatArg> for ExportMode {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Excel => Self::Excel,
            FormatArg::Csv => Self::Csv,
            FormatArg::Both => Self::Both,
        }
    }
}

impl TryFrom<Args> for RunConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let mode = ExportMode::from(args.output.export_format());
        let output = with_main_extension(&args.output.output, mode);

        let mut header = match &args.header.header_config {
            Some(path) => HeaderTemplate::from_path(path)?,
            None => HeaderTemplate::default(),
        };
        if let Some(litigant) = args.header.litigant {
            header = header.with_litigant(litigant);
        }

        let scan = ScanOptionsBuilder::default()
            .include_hidden(!args.scan.skip_hidden)
            .exclude(output_paths(&output))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let capabilities = PdfCapabilities::available()
            .with_structural(!args.scan.no_structural)
            .with_alternate(!args.scan.no_alternate);
        let pdf = PdfOptionsBuilder::default()
            .capabilities(capabilities)
            .timeout(args.scan.pdf_timeout)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let engine = ConfigBuilder::default()
            .root(args.directory)
            .scan(scan)
            .pdf(pdf)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            engine,
            output,
            mode,
            header,
            csv_delimiter: args.output.csv_delimiter.0,
        })
    }
}

/// Add the main format's extension when the name has none; an explicit
/// `.csv`/`.xlsx` is swapped to match the mode.
fn with_main_extension(output: &Path, mode: ExportMode) -> PathBuf {
    let main = match mode {
        ExportMode::Csv => OutputFormat::Csv,
        ExportMode::Excel | ExportMode::Both => OutputFormat::Xlsx,
    };
    let known = output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx") || e.eq_ignore_ascii_case("csv"));
    match output.extension() {
        Some(_) if !known => {
            let mut name = output.as_os_str().to_owned();
            name.push(".");
            name.push(main.extension());
            PathBuf::from(name)
        }
        _ => output.with_extension(main.extension()),
    }
}

/// Files this run may write at the requested location; never indexed.
fn output_paths(output: &Path) -> Vec<PathBuf> {
    [OutputFormat::Xlsx, OutputFormat::Csv]
        .into_iter()
        .filter_map(|format| std::path::absolute(output.with_extension(format.extension())).ok())
        .collect()
}
