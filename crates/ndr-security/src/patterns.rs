//! Pattern catalog - ordered category matchers
//!
//! The standard order is DATE, FEE, EMAIL, PHONE and it is part of the
//! contract: once a span is replaced by a marker it holds no digits, so the
//! permissive phone pattern cannot eat the tail of a date or an amount.
//! Reordering changes output on inputs like `$305.5599`.

use lazy_static::lazy_static;
use ndr_core::{Error, RedactionTag, Result};
use regex::{NoExpand, Regex, RegexBuilder};
use tracing::debug;

const MONTH: &str = r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*";

lazy_static! {
    // 12/06/2025 | 2025-12-06 | 12/06/25 | Dec 6, 2025 | 6 December 2025
    static ref DATE_PATTERN: Regex = compile(&format!(
        r"\b\d{{1,2}}/\d{{1,2}}/\d{{4}}\b|\b\d{{4}}-\d{{1,2}}-\d{{1,2}}\b|\b\d{{1,2}}/\d{{1,2}}/\d{{2}}\b|\b{month} \d{{1,2}}, \d{{4}}\b|\b\d{{1,2}} {month} \d{{4}}\b",
        month = MONTH
    ))
    .unwrap();

    // $1,200.00 | 500 euros | 30% of | 10,000 retainer
    static ref FEE_PATTERN: Regex = compile(concat!(
        r"(?:\$|€|\bUSD\b|\bdollars\b|\beuros\b)\s*\d+(?:,\d{3})*(?:\.\d{2})?",
        r"|\d+(?:,\d{3})*(?:\.\d{2})?\s*(?:USD|dollars|euros)\b",
        r"|\b\d+\.?\d*%?\s*(?:of|fees?|deposits?|retainers?|caps?|bonus(?:es)?|payments?|profits?)\b",
    ))
    .unwrap();

    static ref EMAIL_PATTERN: Regex =
        compile(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();

    // +1 (305) 555-0199 | 305.555.0199 | 5550199
    static ref PHONE_PATTERN: Regex = compile(concat!(
        r"(?:\+?\d{1,3}[-.\s]?)?",
        r"(?:\(?\d{3}\)?[-.\s]?)?",
        r"\d{3}[-.\s]?\d{4}",
    ))
    .unwrap();
}

fn compile(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// One matcher in the catalog
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub tag: RedactionTag,
    pub regex: Regex,
}

impl CatalogEntry {
    pub fn new(tag: RedactionTag, regex: Regex) -> Self {
        Self { tag, regex }
    }

    /// Replace every match with the tag's marker, returning the match count
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.regex.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }

        let replaced = self
            .regex
            .replace_all(text, NoExpand(self.tag.marker()))
            .into_owned();
        (replaced, count)
    }
}

/// Ordered list of matchers, applied first to last
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    entries: Vec<CatalogEntry>,
}

impl PatternCatalog {
    /// Catalog with no matchers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in matchers in their required order
    pub fn standard() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new(RedactionTag::Date, DATE_PATTERN.clone()),
                CatalogEntry::new(RedactionTag::Fee, FEE_PATTERN.clone()),
                CatalogEntry::new(RedactionTag::Email, EMAIL_PATTERN.clone()),
                CatalogEntry::new(RedactionTag::Phone, PHONE_PATTERN.clone()),
            ],
        }
    }

    /// Append a case-insensitive matcher after the existing ones
    pub fn push(&mut self, tag: RedactionTag, pattern: &str) -> Result<()> {
        let regex = compile(pattern)
            .map_err(|e| Error::InvalidPattern(format!("{} pattern '{}': {}", tag, pattern, e)))?;
        self.entries.push(CatalogEntry::new(tag, regex));
        Ok(())
    }

    /// Drop every matcher for `tag`
    pub fn without(mut self, tag: RedactionTag) -> Self {
        self.entries.retain(|entry| entry.tag != tag);
        self
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn tags(&self) -> Vec<RedactionTag> {
        self.entries.iter().map(|entry| entry.tag).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every pass in order, each over the previous pass's output
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();

        for entry in &self.entries {
            let (replaced, count) = entry.apply(&result);
            if count > 0 {
                debug!(tag = %entry.tag, count, "Pattern pass redacted spans");
                result = replaced;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: RedactionTag) -> CatalogEntry {
        PatternCatalog::standard()
            .entries()
            .iter()
            .find(|e| e.tag == tag)
            .cloned()
            .unwrap()
    }

    fn redact_one(tag: RedactionTag, text: &str) -> String {
        entry(tag).apply(text).0
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            PatternCatalog::standard().tags(),
            vec![
                RedactionTag::Date,
                RedactionTag::Fee,
                RedactionTag::Email,
                RedactionTag::Phone
            ]
        );
    }

    #[test]
    fn test_date_formats() {
        for date in [
            "12/06/2025",
            "1/2/2025",
            "2025-12-06",
            "2025-1-6",
            "12/06/25",
            "Dec 6, 2025",
            "December 16, 2025",
            "6 Dec 2025",
            "06 december 2025",
            "6 SEPT 2025",
        ] {
            let text = format!("Signed on {} here", date);
            assert_eq!(
                redact_one(RedactionTag::Date, &text),
                "Signed on [REDACTED_DATE] here",
                "date form {:?}",
                date
            );
        }
    }

    #[test]
    fn test_date_rejects_non_dates() {
        assert_eq!(redact_one(RedactionTag::Date, "Version 1.2.3"), "Version 1.2.3");
        assert_eq!(redact_one(RedactionTag::Date, "ratio 3/4"), "ratio 3/4");
        assert_eq!(redact_one(RedactionTag::Date, "Dec 2025"), "Dec 2025");
    }

    #[test]
    fn test_fee_currency_forms() {
        assert_eq!(redact_one(RedactionTag::Fee, "pay $1,200.00 now"), "pay [REDACTED_FEE] now");
        assert_eq!(redact_one(RedactionTag::Fee, "pay $ 500 now"), "pay [REDACTED_FEE] now");
        assert_eq!(redact_one(RedactionTag::Fee, "pay €75.50"), "pay [REDACTED_FEE]");
        assert_eq!(redact_one(RedactionTag::Fee, "USD 10,000"), "[REDACTED_FEE]");
        assert_eq!(redact_one(RedactionTag::Fee, "10,000 USD total"), "[REDACTED_FEE] total");
        assert_eq!(redact_one(RedactionTag::Fee, "500 euros"), "[REDACTED_FEE]");
        assert_eq!(redact_one(RedactionTag::Fee, "250 Dollars"), "[REDACTED_FEE]");
    }

    #[test]
    fn test_fee_contract_language() {
        assert_eq!(
            redact_one(RedactionTag::Fee, "receives 30% of net"),
            "receives [REDACTED_FEE] net"
        );
        assert_eq!(
            redact_one(RedactionTag::Fee, "a 5000 retainer"),
            "a [REDACTED_FEE]"
        );
        assert_eq!(
            redact_one(RedactionTag::Fee, "a 2.5 bonus"),
            "a [REDACTED_FEE]"
        );
        assert_eq!(
            redact_one(RedactionTag::Fee, "two 100 payments"),
            "two [REDACTED_FEE]"
        );
    }

    #[test]
    fn test_fee_keyword_must_be_whole_word() {
        assert_eq!(redact_one(RedactionTag::Fee, "5 often"), "5 often");
        assert_eq!(redact_one(RedactionTag::Fee, "3 capital"), "3 capital");
    }

    #[test]
    fn test_email() {
        assert_eq!(
            redact_one(RedactionTag::Email, "mail John.Doe+nda@mail.acme.co.uk today"),
            "mail [REDACTED_EMAIL] today"
        );
        assert_eq!(redact_one(RedactionTag::Email, "user@localhost"), "user@localhost");
    }

    #[test]
    fn test_phone_shapes() {
        for phone in [
            "305-555-0199",
            "(305) 555-0199",
            "305.555.0199",
            "+1 305 555 0199",
            "555-0199",
            "3055550199",
        ] {
            let text = format!("call {} now", phone);
            let (redacted, count) = entry(RedactionTag::Phone).apply(&text);
            assert!(
                redacted.starts_with("call ") && redacted.contains("[REDACTED_PHONE]"),
                "phone {:?} gave {:?}",
                phone,
                redacted
            );
            assert!(
                !redacted.chars().any(|c| c.is_ascii_digit()),
                "phone {:?} left digits: {:?}",
                phone,
                redacted
            );
            assert!(count >= 1);
        }
    }

    #[test]
    fn test_phone_over_matches_long_digit_runs() {
        // Accepted trade-off: any 7+ digit run reads as a phone number.
        assert_eq!(
            redact_one(RedactionTag::Phone, "Invoice 1234567"),
            "Invoice [REDACTED_PHONE]"
        );
    }

    #[test]
    fn test_passes_are_idempotent_on_markers() {
        let catalog = PatternCatalog::standard();
        let once = catalog.apply("On 12/06/2025 pay $300 to a@b.io or 305-555-0199");
        assert_eq!(
            once,
            "On [REDACTED_DATE] pay [REDACTED_FEE] to [REDACTED_EMAIL] or [REDACTED_PHONE]"
        );
        assert_eq!(catalog.apply(&once), once);
    }

    #[test]
    fn test_fee_before_phone_ordering_matters() {
        let standard = PatternCatalog::standard();
        assert_eq!(standard.apply("$305.5599"), "[REDACTED_FEE]99");

        let mut swapped = PatternCatalog::empty();
        swapped.entries.push(entry(RedactionTag::Phone));
        swapped.entries.push(entry(RedactionTag::Fee));
        assert_eq!(swapped.apply("$305.5599"), "$[REDACTED_PHONE]");
    }

    #[test]
    fn test_without_removes_category() {
        let catalog = PatternCatalog::standard().without(RedactionTag::Phone);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.apply("call 305-555-0199"), "call 305-555-0199");
    }

    #[test]
    fn test_push_custom_pattern() {
        let mut catalog = PatternCatalog::empty();
        catalog.push(RedactionTag::Fee, r"\bGBP\s*\d+").unwrap();
        assert_eq!(catalog.apply("owes gbp 40"), "owes [REDACTED_FEE]");
    }

    #[test]
    fn test_push_invalid_pattern() {
        let mut catalog = PatternCatalog::empty();
        let err = catalog.push(RedactionTag::Date, "(unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_replacement_is_literal() {
        let mut catalog = PatternCatalog::empty();
        catalog.push(RedactionTag::Fee, r"(\d+) coins").unwrap();
        assert_eq!(catalog.apply("7 coins"), "[REDACTED_FEE]");
    }
}
