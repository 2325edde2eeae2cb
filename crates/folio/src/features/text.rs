//! Text normalization and tokenization.

/// Whitespace that survives normalization and separates tokens.
fn is_separator(c: char) -> bool { matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r') }

/// Lowercases `text` and drops every character that is not `a`-`z` or whitespace.
///
/// Digits, punctuation and non-ASCII letters are removed outright, so `"Don't panic, 42!"`
/// becomes `"dont panic "`.
pub fn normalize(text: &str) -> String {
  text.to_lowercase().chars().filter(|&c| c.is_ascii_lowercase() || is_separator(c)).collect()
}

/// Splits normalized text on whitespace, skipping the empty pieces between repeated separators.
pub fn tokenize(text: &str) -> Vec<String> {
  text.split(is_separator).filter(|token| !token.is_empty()).map(str::to_string).collect()
}
