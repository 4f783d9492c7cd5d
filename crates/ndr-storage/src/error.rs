//! Error types for ndr-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt hash log entry at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
