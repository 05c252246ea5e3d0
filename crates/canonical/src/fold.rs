use unicode_normalization::UnicodeNormalization;

/// Returns true for characters in the Combining Diacritical Marks block
/// (U+0300..=U+036F).
///
/// Only this block is folded away. Marks from other scripts are left in place
/// and are later treated as delimiters by [`normalize`](crate::normalize).
#[inline]
pub fn is_combining_diacritic(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}

/// Decomposes `text` (NFD) and drops combining diacritical marks.
///
/// Case and punctuation are preserved; `"Getúlio"` becomes `"Getulio"`.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|ch| !is_combining_diacritic(*ch)).collect()
}
