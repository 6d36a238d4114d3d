use crate::pdf::PdfCapabilities;
use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;

/// How the immediate children of the indexed folder are listed.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    /// Dot-files are indexed like any other entry unless disabled.
    #[builder(default = "true")]
    pub include_hidden: bool,
    /// Absolute paths never listed (typically the report being written),
    /// together with their `<stem>_YYYYMMDD_HHMMSS` fallback copies.
    #[builder(default)]
    pub exclude: Vec<PathBuf>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            exclude: vec![],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Builder)]
#[builder(setter(into))]
pub struct PdfOptions {
    #[builder(default)]
    pub capabilities: PdfCapabilities,
    /// Per-strategy budget for the library page counters; `None` runs them inline.
    #[builder(default)]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub root: PathBuf,
    #[builder(default)]
    pub scan: ScanOptions,
    #[builder(default)]
    pub pdf: PdfOptions,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scan: ScanOptions::default(),
            pdf: PdfOptions::default(),
        }
    }
}
