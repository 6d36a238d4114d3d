use crate::entry::{DirectoryEntry, EntryFacts, FOLDER_FORMAT};
use crate::error::EngineError;
use crate::filesystem::count_child_files;
use crate::pdf::PdfPageResolver;
use file_indexer_shared_kernel::{CreationTime, FileCount, FileExtension, FileSize};

/// Facts for one entry plus the problems that were replaced by defaults.
#[derive(Debug)]
pub struct Resolution {
    pub facts: EntryFacts,
    pub issues: Vec<EngineError>,
}

/// Computes [`EntryFacts`] for each listed entry. Failures degrade to
/// defaults (current time, `0 bytes`, one page) and are reported as issues.
#[derive(Debug, Default)]
pub struct MetadataResolver {
    pdf: PdfPageResolver,
}

impl MetadataResolver {
    pub fn new(pdf: PdfPageResolver) -> Self {
        Self { pdf }
    }

    pub fn resolve(&self, entry: &DirectoryEntry) -> Resolution {
        let mut issues = Vec::new();

        let meta = std::fs::metadata(&entry.path)
            .map_err(|source| {
                issues.push(EngineError::Metadata {
                    path: entry.path.clone(),
                    source,
                });
            })
            .ok();
        let creation = meta
            .as_ref()
            .and_then(CreationTime::from_metadata)
            .unwrap_or_else(CreationTime::now);

        let facts = if entry.is_directory {
            let files = count_child_files(&entry.path).unwrap_or_else(|err| {
                issues.push(err);
                0
            });
            EntryFacts {
                name: entry.name.clone(),
                path: entry.path.clone(),
                is_directory: true,
                creation,
                page_count: 1,
                page_method: None,
                format_label: FOLDER_FORMAT.to_string(),
                size_label: FileCount::new(files).to_label(),
            }
        } else {
            let size = meta.as_ref().map_or_else(FileSize::zero, |m| FileSize::new(m.len()));
            let pages = self.pdf.resolve(&entry.path);
            EntryFacts {
                name: entry.name.clone(),
                path: entry.path.clone(),
                is_directory: false,
                creation,
                page_count: pages.pages,
                page_method: Some(pages.method),
                format_label: FileExtension::from_path(&entry.path).format_label(),
                size_label: size.to_label(),
            }
        };

        for issue in &issues {
            log::warn!("{issue}");
        }
        Resolution { facts, issues }
    }
}
