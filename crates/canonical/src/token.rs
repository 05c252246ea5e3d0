/// Splits canonical text into tokens.
///
/// Assumes `text` already went through [`normalize`](crate::normalize);
/// pieces are separated by Unicode whitespace and empty pieces are dropped.
/// Token order follows the text.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
