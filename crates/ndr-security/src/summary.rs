//! Marker tally over redacted text

use lazy_static::lazy_static;
use ndr_core::{MARKER_PREFIX, MARKER_SUFFIX, RedactionSummary, RedactionTag};
use regex::Regex;

lazy_static! {
    // \[REDACTED_(DATE|FEE|EMAIL|PHONE|NAME)\]
    static ref MARKER_PATTERN: Regex = {
        let tags: Vec<&str> = RedactionTag::ALL.iter().map(|tag| tag.as_str()).collect();
        Regex::new(&format!(
            "{}({}){}",
            regex::escape(MARKER_PREFIX),
            tags.join("|"),
            regex::escape(MARKER_SUFFIX)
        ))
        .unwrap()
    };
}

/// Count the markers present in `redacted`, per tag
pub fn summarize(redacted: &str) -> RedactionSummary {
    MARKER_PATTERN
        .captures_iter(redacted)
        .filter_map(|caps| caps.get(1))
        .filter_map(|tag| tag.as_str().parse::<RedactionTag>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(summarize("").is_empty());
        assert!(summarize("nothing redacted here").is_empty());
    }

    #[test]
    fn test_counts_match_marker_occurrences() {
        let mut text = String::new();
        for _ in 0..3 {
            text.push_str("x [REDACTED_DATE] ");
        }
        for _ in 0..5 {
            text.push_str("[REDACTED_NAME],");
        }
        text.push_str("[REDACTED_PHONE]");

        let summary = summarize(&text);
        assert_eq!(summary.count(RedactionTag::Date), 3);
        assert_eq!(summary.count(RedactionTag::Name), 5);
        assert_eq!(summary.count(RedactionTag::Phone), 1);
        assert_eq!(summary.count(RedactionTag::Fee), 0);
        assert_eq!(summary.total(), 9);
    }

    #[test]
    fn test_ignores_lookalikes() {
        let summary = summarize("[REDACTED_SSN] [redacted_date] [REDACTED_DATE [REDACTED_FEE]");
        assert_eq!(summary.total(), 1);
        assert_eq!(summary.count(RedactionTag::Fee), 1);
    }
}
