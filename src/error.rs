use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to render chart {}: {message}", .path.display())]
    Render {
        path: PathBuf,
        message: String,
    },

    #[error("failed to register chart font: {0}")]
    Font(String),

    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReportError::Write {
            path: path.into(),
            source,
        }
    }
}
