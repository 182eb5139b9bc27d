//! Error types for pyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a source tree
#[derive(Error, Debug)]
pub enum PylocError {
    /// Scan root does not exist or is not a directory
    #[error("{0} doesn't exist or is not a directory")]
    InvalidPath(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("failed to decode file '{path}' as UTF-8: {source}")]
    FileDecode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PylocError {
    /// Whether the error only affects a single file and the scan may continue.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::FileDecode { .. })
    }
}
