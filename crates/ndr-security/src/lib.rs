//! Redaction engine for ndr
//!
//! Pipeline: normalize → pattern catalog passes (date, fee, email, phone)
//! → client name tokens. Every stage takes the whole text and returns a new
//! string; the summary is derived from the final text afterwards.

pub mod names;
pub mod normalize;
pub mod patterns;
pub mod redactor;
pub mod summary;

pub use names::{NameSet, redact_names};
pub use normalize::{normalize, normalize_key};
pub use patterns::{CatalogEntry, PatternCatalog};
pub use redactor::Redactor;
pub use summary::summarize;
