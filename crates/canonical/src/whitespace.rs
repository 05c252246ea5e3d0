//! Whitespace normalization.
//!
//! Whitespace is Unicode whitespace (`char::is_whitespace`), so tabs,
//! newlines and non-breaking spaces all collapse the same way.

/// Collapses repeated whitespace into single ASCII spaces and trims both ends.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  getulio \t\n vargas  "), "getulio vargas");
/// assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello world");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
