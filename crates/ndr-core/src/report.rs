//! Run report - what one redaction run produced

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::RedactionSummary;

/// Audit record for a single redaction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionReport {
    pub run_id: String,
    pub source_path: String,
    pub output_path: String,
    pub summary: RedactionSummary,
    /// Name of the digest algorithm used for both hashes
    pub algorithm: String,
    pub source_hash: String,
    pub output_hash: String,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

impl RedactionReport {
    pub fn new(source_path: String, output_path: String, summary: RedactionSummary) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            source_path,
            output_path,
            summary,
            algorithm: String::new(),
            source_hash: String::new(),
            output_hash: String::new(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_hashes(mut self, algorithm: &str, source_hash: String, output_hash: String) -> Self {
        self.algorithm = algorithm.to_string();
        self.source_hash = source_hash;
        self.output_hash = output_hash;
        self
    }
}
