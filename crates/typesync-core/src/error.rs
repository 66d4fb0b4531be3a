use std::path::PathBuf;

use thiserror::Error;

/// Core error type for typesync operations.
#[derive(Error, Debug)]
pub enum TypesyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source directory not found: {0}")]
    SourceRootNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using TypesyncError.
pub type Result<T> = std::result::Result<T, TypesyncError>;
