use unicode_normalization::UnicodeNormalization;

use crate::fold::is_combining_diacritic;
use crate::whitespace::collapse_whitespace;

/// Canonicalizes arbitrary text into the comparable form used by search.
///
/// Steps, in order: NFD decomposition, removal of combining diacritical
/// marks, lowercasing, mapping every character outside `[a-z0-9]` to a space,
/// whitespace collapsing, trimming.
///
/// Lowercasing happens after the marks are removed, so a mark introduced by
/// lowercasing (`'İ'` lowercases to `"i\u{307}"`) is treated as a delimiter
/// rather than folded.
pub fn normalize(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());

    for ch in text.nfd() {
        if is_combining_diacritic(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
                mapped.push(lower);
            } else {
                mapped.push(' ');
            }
        }
    }

    collapse_whitespace(&mapped)
}

/// [`normalize`] for optional fields; `None` yields an empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
