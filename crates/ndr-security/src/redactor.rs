//! Redaction engine

use ndr_core::RedactionSummary;
use tracing::debug;

use crate::names::{NameSet, redact_names};
use crate::normalize::normalize;
use crate::patterns::PatternCatalog;
use crate::summary::summarize;

/// Redaction engine over an explicit, ordered pattern catalog
pub struct Redactor {
    catalog: PatternCatalog,
}

impl Redactor {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Redact `text`, returning the normalized text with markers in place
    ///
    /// Order: normalize, catalog passes (first to last), client names. A span
    /// replaced by one pass is a marker for every later pass.
    pub fn redact<S: AsRef<str>>(&self, text: &str, client_names: &[S]) -> String {
        let normalized = normalize(text);
        let names = NameSet::new(client_names);
        debug!(
            chars = normalized.len(),
            name_words = names.len(),
            "Redacting text"
        );

        let patterned = self.catalog.apply(&normalized);
        redact_names(&patterned, &names)
    }

    /// Redact and tally the markers in the result
    pub fn redact_with_summary<S: AsRef<str>>(
        &self,
        text: &str,
        client_names: &[S],
    ) -> (String, RedactionSummary) {
        let redacted = self.redact(text, client_names);
        let summary = summarize(&redacted);
        (redacted, summary)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(PatternCatalog::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndr_core::RedactionTag;

    const NO_NAMES: [&str; 0] = [];

    #[test]
    fn test_empty_input() {
        let redactor = Redactor::default();
        assert_eq!(redactor.redact("", &NO_NAMES), "");

        let (redacted, summary) = redactor.redact_with_summary("", &NO_NAMES);
        assert_eq!(redacted, "");
        assert!(summary.is_empty());
    }

    #[test]
    fn test_fee_and_date_each_once() {
        let redactor = Redactor::default();
        assert_eq!(
            redactor.redact("$1,200.00 due 12/06/2025", &NO_NAMES),
            "[REDACTED_FEE] due [REDACTED_DATE]"
        );
    }

    #[test]
    fn test_email_and_phone_independent() {
        let redactor = Redactor::default();
        assert_eq!(
            redactor.redact("Contact john@acme.com or 305-555-0199", &NO_NAMES),
            "Contact [REDACTED_EMAIL] or [REDACTED_PHONE]"
        );
    }

    #[test]
    fn test_names_with_diacritics_and_curly_apostrophe() {
        let redactor = Redactor::default();
        assert_eq!(
            redactor.redact("Between José and Mr. O’Brien.", &["Jose", "O'Brien"]),
            "Between [REDACTED_NAME] and Mr. [REDACTED_NAME]."
        );
    }

    #[test]
    fn test_name_boundary() {
        let redactor = Redactor::default();
        assert_eq!(
            redactor.redact("Ann and Annette", &["Ann"]),
            "[REDACTED_NAME] and Annette"
        );
    }

    #[test]
    fn test_idempotent() {
        let redactor = Redactor::default();
        let names = ["Acme Corp", "Zoë"];
        let text = "This NDA between Acme Corp and Zoë Smith, dated Dec 6, 2025, \
                    carries a $5,000 retainer and 10% of profit. \
                    Notices to legal@acme.com or +1 (305) 555-0199 before 2026-01-15.";

        let once = redactor.redact(text, &names);
        let twice = redactor.redact(&once, &names);
        assert_eq!(once, twice);

        let summary = summarize(&once);
        assert_eq!(summary.count(RedactionTag::Date), 2);
        assert_eq!(summary.count(RedactionTag::Email), 1);
        assert_eq!(summary.count(RedactionTag::Phone), 1);
        assert_eq!(summary.count(RedactionTag::Name), 3);
        assert!(!once.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_output_is_normalized() {
        let redactor = Redactor::default();
        assert_eq!(redactor.redact("Café d’Été", &NO_NAMES), "Cafe d'Ete");
    }

    #[test]
    fn test_disabled_category_passes_through() {
        let redactor = Redactor::new(PatternCatalog::standard().without(RedactionTag::Email));
        assert_eq!(
            redactor.redact("write to a@b.com", &NO_NAMES),
            "write to a@b.com"
        );
    }

    #[test]
    fn test_summary_matches_text() {
        let redactor = Redactor::default();
        let (redacted, summary) =
            redactor.redact_with_summary("Pay $10 and $20 to Bob on 1/2/2025", &["bob"]);
        assert_eq!(
            redacted,
            "Pay [REDACTED_FEE] and [REDACTED_FEE] to [REDACTED_NAME] on [REDACTED_DATE]"
        );
        assert_eq!(summary.count(RedactionTag::Fee), 2);
        assert_eq!(summary.count(RedactionTag::Name), 1);
        assert_eq!(summary.count(RedactionTag::Date), 1);
        assert_eq!(summary.total(), 4);
    }
}
