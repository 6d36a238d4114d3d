use std::path::PathBuf;

use file_indexer_shared_kernel::{CreationTime, FileName};

use crate::error::EngineError;
use crate::pdf::PageCountMethod;

/// Value of the "Origen" column; every indexed entry is a digital document.
pub const ELECTRONIC_ORIGIN: &str = "ELECTRONICO";

/// Value of the "Formato" column for folders.
pub const FOLDER_FORMAT: &str = "CARPETA";

/// Immediate child of the indexed folder, as listed by the enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: FileName,
    pub path: PathBuf,
    pub is_directory: bool,
}

impl DirectoryEntry {
    pub fn new(path: impl Into<PathBuf>, is_directory: bool) -> Self {
        let path = path.into();
        Self {
            name: FileName::from_path(&path),
            path,
            is_directory,
        }
    }
}

/// Per-entry facts that do not depend on the entry's position in the index.
#[derive(Debug, Clone)]
pub struct EntryFacts {
    pub name: FileName,
    pub path: PathBuf,
    pub is_directory: bool,
    pub creation: CreationTime,
    pub page_count: usize,
    pub page_method: Option<PageCountMethod>,
    pub format_label: String,
    pub size_label: String,
}

/// One row of the index: entry facts plus the page range assigned by the fold.
#[derive(Debug, Clone)]
pub struct ResolvedMetadata {
    /// 1-based position in the ordered index.
    pub sequence: usize,
    pub display_name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub creation: CreationTime,
    pub page_count: usize,
    pub page_method: Option<PageCountMethod>,
    pub start_page: usize,
    pub end_page: usize,
    pub format_label: String,
    pub size_label: String,
    pub origin_label: &'static str,
}

/// Output of a full run: the ordered rows and every per-entry problem that was absorbed.
#[derive(Debug, Default)]
pub struct RunResult {
    pub entries: Vec<ResolvedMetadata>,
    pub warnings: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    pub fn total_pages(&self) -> usize {
        self.entries.last().map_or(0, |e| e.end_page)
    }
}
