//! Client name matching
//!
//! Names are compared token by token in normalized, lower-cased form. A
//! multi-word name such as "Acme Corp" contributes "acme" and "corp"
//! separately, so each word is redacted wherever it stands on its own.

use std::collections::{BTreeSet, HashSet};

use lazy_static::lazy_static;
use ndr_core::RedactionTag;
use regex::{NoExpand, Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::normalize::normalize_key;

lazy_static! {
    // Word characters plus straight and curly apostrophes
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\b[\w'’]+\b").unwrap();
}

/// Normalized, lower-cased name words
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    keys: HashSet<String>,
}

impl NameSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = names
            .into_iter()
            .flat_map(|name| {
                let key = normalize_key(name.as_ref());
                TOKEN_PATTERN
                    .find_iter(&key)
                    .map(|m| m.as_str().to_string())
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { keys }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.keys.contains(&normalize_key(token))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Whole-word, case-insensitive matcher for one literal token
fn whole_word(token: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(token)))
        .case_insensitive(true)
        .build()
}

/// Replace every whole-word occurrence of a listed name with `[REDACTED_NAME]`
///
/// Each distinct token spelling gets one substitution pass that covers all
/// of its occurrences, in any letter case.
pub fn redact_names(text: &str, names: &NameSet) -> String {
    if names.is_empty() {
        return text.to_string();
    }

    let tokens: BTreeSet<&str> = TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect();
    let marker = RedactionTag::Name.marker();
    let mut result = text.to_string();
    let mut passes = 0usize;

    for token in tokens {
        if !names.contains(token) {
            continue;
        }

        let pattern = match whole_word(token) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!("Skipping name token that did not compile: {}", e);
                continue;
            }
        };

        result = pattern.replace_all(&result, NoExpand(marker)).into_owned();
        passes += 1;
    }

    debug!(passes, "Name pass finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn redact(text: &str, names: &[&str]) -> String {
        redact_names(&normalize(text), &NameSet::new(names))
    }

    #[test]
    fn test_name_set_splits_words() {
        let set = NameSet::new(["Acme Corp", "  ", "José O’Brien"]);
        assert_eq!(set.len(), 4);
        assert!(set.contains("ACME"));
        assert!(set.contains("corp"));
        assert!(set.contains("jose"));
        assert!(set.contains("O'Brien"));
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(
            redact("Ann met Annette and ann.", &["Ann"]),
            "[REDACTED_NAME] met Annette and [REDACTED_NAME]."
        );
    }

    #[test]
    fn test_diacritics_and_apostrophes() {
        assert_eq!(
            redact("José O’Brien signed", &["Jose", "O'Brien"]),
            "[REDACTED_NAME] [REDACTED_NAME] signed"
        );
        assert_eq!(
            redact("Jose OBrien", &["José"]),
            "[REDACTED_NAME] OBrien"
        );
    }

    #[test]
    fn test_every_case_variant_replaced() {
        assert_eq!(
            redact("SMITH, Smith and smith", &["Smith"]),
            "[REDACTED_NAME], [REDACTED_NAME] and [REDACTED_NAME]"
        );
    }

    #[test]
    fn test_multi_word_name_redacts_each_word() {
        assert_eq!(
            redact("Bright Corp is a bright idea; Corp matters.", &["Bright Corp"]),
            "[REDACTED_NAME] [REDACTED_NAME] is a [REDACTED_NAME] idea; [REDACTED_NAME] matters."
        );
    }

    #[test]
    fn test_possessive_is_a_different_token() {
        assert_eq!(redact("Ann's file", &["Ann"]), "Ann's file");
    }

    #[test]
    fn test_no_names_is_identity() {
        let text = "Nothing to see, Ann.";
        assert_eq!(redact_names(text, &NameSet::default()), text);
    }

    #[test]
    fn test_tokens_with_metacharacters_are_literal() {
        assert_eq!(
            redact("a_b+ a.b a_b", &["a_b"]),
            "[REDACTED_NAME]+ a.b [REDACTED_NAME]"
        );
        assert!(whole_word("x.y*z").unwrap().is_match("x.y*z"));
        assert!(!whole_word("x.y*z").unwrap().is_match("xzyyyz"));
    }

    #[test]
    fn test_markers_are_not_names() {
        assert_eq!(
            redact("[REDACTED_DATE] Doe", &["Doe"]),
            "[REDACTED_DATE] [REDACTED_NAME]"
        );
    }
}
