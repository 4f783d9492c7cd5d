//! Redaction summary - per-tag marker counts

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RedactionTag;

/// Count of markers per tag found in a redacted text
///
/// This is a view over the output text, not a running counter: it is built
/// by scanning for markers, so it always agrees with the text it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedactionSummary {
    counts: BTreeMap<RedactionTag, usize>,
}

impl RedactionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `tag`
    pub fn record(&mut self, tag: RedactionTag) {
        *self.counts.entry(tag).or_insert(0) += 1;
    }

    pub fn count(&self, tag: RedactionTag) -> usize {
        self.counts.get(&tag).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tags with a non-zero count, in tag order
    pub fn iter(&self) -> impl Iterator<Item = (RedactionTag, usize)> + '_ {
        self.counts.iter().map(|(tag, count)| (*tag, *count))
    }
}

impl FromIterator<RedactionTag> for RedactionSummary {
    fn from_iter<I: IntoIterator<Item = RedactionTag>>(iter: I) -> Self {
        let mut summary = Self::new();
        for tag in iter {
            summary.record(tag);
        }
        summary
    }
}

impl fmt::Display for RedactionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- REDACTION SUMMARY ---")?;
        if self.is_empty() {
            writeln!(f, "No redactions were made.")?;
        } else {
            for (tag, count) in self.iter() {
                writeln!(f, "{}: {}", tag.marker(), count)?;
            }
        }
        write!(f, "-------------------------")
    }
}
