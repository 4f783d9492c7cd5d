//! Integrity layer for ndr
//!
//! This crate provides:
//! - File and byte digests (BLAKE3 or SHA-256, hex encoded)
//! - The append-only hash log used to verify runs afterwards

pub mod digest;
pub mod error;
pub mod hashlog;

pub use digest::{DigestAlgorithm, digest_bytes, digest_file};
pub use error::{Result, StorageError};
pub use hashlog::{HashLog, HashLogEntry};
