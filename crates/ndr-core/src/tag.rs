//! Redaction tags and the marker format
//!
//! A marker is the literal ASCII string `[REDACTED_`, one of the tag names,
//! then `]`. Anything parsing redacted output must match exactly that shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

pub const MARKER_PREFIX: &str = "[REDACTED_";
pub const MARKER_SUFFIX: &str = "]";

/// Category of a redacted span
///
/// The variant order is the order summaries are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RedactionTag {
    Date,
    Fee,
    Email,
    Phone,
    Name,
}

impl RedactionTag {
    pub const ALL: [RedactionTag; 5] = [
        RedactionTag::Date,
        RedactionTag::Fee,
        RedactionTag::Email,
        RedactionTag::Phone,
        RedactionTag::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RedactionTag::Date => "DATE",
            RedactionTag::Fee => "FEE",
            RedactionTag::Email => "EMAIL",
            RedactionTag::Phone => "PHONE",
            RedactionTag::Name => "NAME",
        }
    }

    /// The literal text substituted for a span of this category
    pub fn marker(&self) -> &'static str {
        match self {
            RedactionTag::Date => "[REDACTED_DATE]",
            RedactionTag::Fee => "[REDACTED_FEE]",
            RedactionTag::Email => "[REDACTED_EMAIL]",
            RedactionTag::Phone => "[REDACTED_PHONE]",
            RedactionTag::Name => "[REDACTED_NAME]",
        }
    }
}

impl fmt::Display for RedactionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedactionTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        RedactionTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == upper)
            .ok_or_else(|| Error::UnknownTag(s.to_string()))
    }
}
