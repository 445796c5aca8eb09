//! Error types for dataset preparation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while splitting cameras or reorganizing a dataset.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array in {}", .0.display())]
    NotAnArray(PathBuf),

    #[error("Manifest {} has no 'frames' array", .0.display())]
    MissingFrames(PathBuf),
}

impl PrepError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        PrepError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a JSON error with the file it came from.
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        PrepError::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
