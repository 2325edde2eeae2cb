//! English stopword filtering.

use super::*;

/// The default English list, one word per line.
const ENGLISH: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/stopwords/english.txt"));

lazy_static! {
  /// Parsed default English list.
  static ref ENGLISH_STOPWORDS: StopWords = StopWords::from_words(ENGLISH.lines());
}

/// A case-insensitive set of words to drop from token streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
  /// Lowercased stopwords
  words: HashSet<String>,
}

impl StopWords {
  /// Builds a stopword set from arbitrary words; blank entries are ignored.
  pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
    Self {
      words: words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect(),
    }
  }

  /// The standard English list.
  pub fn english() -> Self { ENGLISH_STOPWORDS.clone() }

  /// Whether `token` is a stopword, ignoring case.
  pub fn contains(&self, token: &str) -> bool {
    if token.chars().any(char::is_uppercase) {
      self.words.contains(&token.to_lowercase())
    } else {
      self.words.contains(token)
    }
  }

  /// Number of distinct stopwords.
  pub fn len(&self) -> usize { self.words.len() }

  /// Whether the set is empty.
  pub fn is_empty(&self) -> bool { self.words.is_empty() }

  /// Drops stopwords from `tokens`, keeping the remaining ones in order.
  pub fn remove(&self, tokens: &[String]) -> Vec<String> {
    tokens.iter().filter(|token| !self.contains(token)).cloned().collect()
  }
}

impl Default for StopWords {
  fn default() -> Self { Self::english() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_english_list() {
    let stopwords = StopWords::english();
    assert_eq!(stopwords.len(), 181);
    assert!(stopwords.contains("the"));
    assert!(stopwords.contains("The"));
    assert!(stopwords.contains("don't"));
    assert!(!stopwords.contains("whale"));
    // Normalization strips the apostrophe, and the bare form isn't listed.
    assert!(!stopwords.contains("dont"));
  }

  #[test]
  fn test_remove_preserves_order() {
    let tokens: Vec<String> =
      ["call", "me", "ishmael", "and", "the", "whale"].iter().map(|s| s.to_string()).collect();
    assert_eq!(StopWords::english().remove(&tokens), vec!["call", "ishmael", "whale"]);
  }

  #[test]
  fn test_custom_words() {
    let stopwords = StopWords::from_words(["Gutenberg", " ", "ebook"]);
    assert_eq!(stopwords.len(), 2);
    assert!(stopwords.contains("gutenberg"));
  }
}
