//! Core domain models for ndr
//!
//! This crate contains:
//! - Redaction tags and the marker wire format
//! - Redaction summaries (per-tag counts)
//! - Run reports (summary plus integrity digests)

pub mod error;
pub mod report;
pub mod summary;
pub mod tag;

pub use error::{Error, Result};
pub use report::RedactionReport;
pub use summary::RedactionSummary;
pub use tag::{MARKER_PREFIX, MARKER_SUFFIX, RedactionTag};
