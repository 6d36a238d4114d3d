use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save workbook '{path}': {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Failed to read header template '{path}': {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} header template '{path}': {details}")]
    TemplateParse {
        format: &'static str,
        path: PathBuf,
        details: String,
    },

    #[error("Could not write the index anywhere ({} attempts); last error: {}", .attempts.len(), last_attempt(.attempts))]
    AllStrategiesFailed { attempts: Vec<(PathBuf, ReportError)> },
}

fn last_attempt(attempts: &[(PathBuf, ReportError)]) -> String {
    attempts
        .last()
        .map_or_else(|| "none".to_string(), |(path, err)| format!("{}: {err}", path.display()))
}

impl ReportError {
    fn io_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::FileWrite { source, .. } => Some(source.kind()),
            Self::Workbook {
                source: rust_xlsxwriter::XlsxError::IoError(source),
                ..
            } => Some(source.kind()),
            Self::AllStrategiesFailed { attempts } => attempts.first().and_then(|(_, e)| e.io_kind()),
            _ => None,
        }
    }

    /// The failure looks like a lock or missing permission rather than a bad path.
    pub fn is_permission_problem(&self) -> bool {
        matches!(
            self.io_kind(),
            Some(ErrorKind::PermissionDenied | ErrorKind::WouldBlock | ErrorKind::ReadOnlyFilesystem)
        )
    }

    /// Actionable hint printed next to the error.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::TemplateRead { .. } | Self::TemplateParse { .. } => {
                "check the --header-config file (YAML or JSON with the header fields)"
            }
            _ if self.is_permission_problem() => {
                "close the file in other programs (e.g. Excel) or choose another --output path"
            }
            _ => "try CSV-only mode (--format csv) or choose another --output path",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
