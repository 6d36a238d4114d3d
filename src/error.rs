// src/error.rs
use file_indexer_engine::error::EngineError;
use file_indexer_report::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// 2 for an unusable input folder, 3 when no output could be written, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(EngineError::NotADirectory { .. }) => 2,
            Self::Report(ReportError::AllStrategiesFailed { .. }) => 3,
            _ => 1,
        }
    }

    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::Engine(EngineError::NotADirectory { .. }) => {
                Some("pass an existing, readable folder with -d/--directory")
            }
            Self::Report(err) => Some(err.remediation()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
