//! Append-only hash log
//!
//! One JSON object per line. Entries are only ever appended; verification
//! scans the whole file.

use std::path::{Path, PathBuf};

use ndr_core::RedactionReport;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::{Result, StorageError};

/// Persisted record of one run's digests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLogEntry {
    pub run_id: String,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    pub algorithm: String,
    pub source_path: String,
    pub source_hash: String,
    pub output_path: String,
    pub output_hash: String,
}

impl From<&RedactionReport> for HashLogEntry {
    fn from(report: &RedactionReport) -> Self {
        Self {
            run_id: report.run_id.clone(),
            created_at: report.created_at,
            algorithm: report.algorithm.clone(),
            source_path: report.source_path.clone(),
            source_hash: report.source_hash.clone(),
            output_path: report.output_path.clone(),
            output_hash: report.output_hash.clone(),
        }
    }
}

pub struct HashLog {
    path: PathBuf,
}

impl HashLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the log (and its directory) if needed
    pub async fn append(&self, entry: &HashLogEntry) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        info!(run_id = %entry.run_id, log = %self.path.display(), "Hashes logged");
        Ok(())
    }

    /// All entries in the order they were written
    pub async fn entries(&self) -> Result<Vec<HashLogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut entries = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(line).map_err(|e| StorageError::Corrupt {
                line: idx + 1,
                reason: e.to_string(),
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Most recent entry recording exactly this source/output digest pair
    pub async fn find(&self, source_hash: &str, output_hash: &str) -> Result<Option<HashLogEntry>> {
        let entries = self.entries().await?;
        Ok(entries
            .into_iter()
            .rev()
            .find(|e| e.source_hash == source_hash && e.output_hash == output_hash))
    }
}
