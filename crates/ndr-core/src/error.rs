use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Unknown redaction tag: {0}")]
    UnknownTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
