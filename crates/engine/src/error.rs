use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::pdf::PageCountMethod;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("'{path}' is not a readable directory: {reason}")]
    NotADirectory { path: PathBuf, reason: String },

    #[error("Failed to read metadata of '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list '{path}': {source}")]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{method} page count failed for '{path}': {reason}")]
    PageCount {
        method: PageCountMethod,
        path: PathBuf,
        reason: String,
    },

    #[error("{method} page count for '{path}' did not finish within {budget:?}")]
    PageCountTimeout {
        method: PageCountMethod,
        path: PathBuf,
        budget: Duration,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
