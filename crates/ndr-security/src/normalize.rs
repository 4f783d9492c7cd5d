//! Canonical comparison form for text and names

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

const LEFT_SINGLE_QUOTE: char = '\u{2018}';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Decompose, drop non-spacing marks (Mn) and fold curly single quotes to `'`.
///
/// Spacing marks (Mc) such as Devanagari vowel signs are kept.
///
/// "José O’Brien" becomes "Jose O'Brien".
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
        .map(|c| match c {
            LEFT_SINGLE_QUOTE | RIGHT_SINGLE_QUOTE => '\'',
            other => other,
        })
        .collect()
}

/// Normalized and lower-cased form used for name comparison
pub fn normalize_key(text: &str) -> String {
    normalize(text).to_lowercase()
}
