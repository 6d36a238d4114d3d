use crate::config::ScanOptions;
use crate::entry::DirectoryEntry;
use crate::error::{EngineError, Result};
use crate::ordering::sort_by_numeric_prefix;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Check that `root` is an existing, listable directory and return its absolute form.
///
/// # Errors
/// Returns [`EngineError::NotADirectory`] when the path is missing, is not a
/// directory, or cannot be listed.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    let not_a_dir = |reason: String| EngineError::NotADirectory {
        path: root.to_path_buf(),
        reason,
    };

    let meta = std::fs::metadata(root).map_err(|e| not_a_dir(e.to_string()))?;
    if !meta.is_dir() {
        return Err(not_a_dir("not a directory".to_string()));
    }
    std::fs::read_dir(root).map_err(|e| not_a_dir(e.to_string()))?;

    std::path::absolute(root).map_err(|e| not_a_dir(e.to_string()))
}

/// List the immediate children of `root` in file-name order.
///
/// Nothing below the first level is visited. Children that vanish or cannot
/// be inspected while listing are logged and skipped.
///
/// # Errors
/// Returns an error if `root` fails [`validate_root`].
pub fn list_directory(root: &Path, options: &ScanOptions) -> Result<Vec<DirectoryEntry>> {
    let root = validate_root(root)?;

    let mut builder = WalkBuilder::new(&root);
    builder
        .standard_filters(false)
        .hidden(!options.include_hidden)
        .follow_links(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut entries = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry in {}: {err}", root.display());
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let path = entry.into_path();
        if options
            .exclude
            .iter()
            .any(|excluded| excluded == &path || is_timestamped_copy(&path, excluded))
        {
            log::debug!("excluded from index: {}", path.display());
            continue;
        }
        // Follows symlinks, so a link to a folder is indexed as a folder.
        let is_directory = path.is_dir();
        entries.push(DirectoryEntry::new(path, is_directory));
    }

    Ok(entries)
}

/// `path` is `<stem>_YYYYMMDD_HHMMSS.<ext>` next to `excluded` (`<stem>.<ext>`),
/// the name a relocated report gets.
fn is_timestamped_copy(path: &Path, excluded: &Path) -> bool {
    if path.parent() != excluded.parent() || path.extension() != excluded.extension() {
        return false;
    }
    let (Some(stem), Some(base)) = (
        path.file_stem().and_then(|s| s.to_str()),
        excluded.file_stem().and_then(|s| s.to_str()),
    ) else {
        return false;
    };
    stem.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|stamp| {
            let bytes = stamp.as_bytes();
            bytes.len() == 15
                && bytes
                    .iter()
                    .enumerate()
                    .all(|(i, b)| if i == 8 { *b == b'_' } else { b.is_ascii_digit() })
        })
}

/// [`list_directory`] followed by the numeric-prefix sort.
///
/// # Errors
/// Returns an error if `root` fails [`validate_root`].
pub fn list_ordered(root: &Path, options: &ScanOptions) -> Result<Vec<DirectoryEntry>> {
    let mut entries = list_directory(root, options)?;
    sort_by_numeric_prefix(&mut entries);
    Ok(entries)
}

/// Number of regular files directly inside `dir` (symlinks to files count).
///
/// # Errors
/// Returns [`EngineError::DirectoryListing`] if `dir` cannot be read.
pub fn count_child_files(dir: &Path) -> Result<usize> {
    let listing = std::fs::read_dir(dir).map_err(|source| EngineError::DirectoryListing {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(listing
        .filter_map(std::result::Result::ok)
        .filter(|child| child.path().is_file())
        .count())
}
