use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::row::Report;

/// Encoding of a written index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Xlsx => "Excel",
            Self::Csv => "CSV",
        })
    }
}

/// Writes a whole report to one file. Implementations must not leave the
/// caller guessing: either the file is complete or an error is returned.
pub trait Renderer {
    fn format(&self) -> OutputFormat;

    fn render(&self, report: &Report, path: &Path) -> Result<()>;
}
