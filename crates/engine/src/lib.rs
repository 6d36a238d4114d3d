// crates/engine/src/lib.rs
pub mod config;
pub mod entry;
pub mod error;
pub mod filesystem;
pub mod metadata;
pub mod mime;
pub mod ordering;
pub mod pagination;
pub mod pdf;

use crate::config::Config;
use crate::entry::RunResult;
use crate::error::Result;
use crate::metadata::MetadataResolver;
use crate::pdf::PdfPageResolver;

/// Index the folder described by `config`.
///
/// Entries are resolved one at a time in numeric-prefix order and folded into
/// page ranges. Every listed entry yields exactly one row; problems with a
/// single entry are collected in `RunResult::warnings`.
///
/// # Errors
///
/// Returns an error only when `config.root` is not a readable directory.
pub fn run(config: &Config) -> Result<RunResult> {
    let entries = filesystem::list_ordered(&config.root, &config.scan)?;
    log::debug!("indexing {} entries under {}", entries.len(), config.root.display());

    let resolver = MetadataResolver::new(PdfPageResolver::from_options(&config.pdf));
    let mut warnings = Vec::new();
    let facts: Vec<_> = entries
        .iter()
        .map(|entry| {
            let resolution = resolver.resolve(entry);
            warnings.extend(resolution.issues.into_iter().map(|e| (entry.path.clone(), e)));
            resolution.facts
        })
        .collect();

    Ok(RunResult {
        entries: pagination::paginate(facts),
        warnings,
    })
}
