//! Bibliographic metadata extraction from free-text book headers.
//!
//! Headers across a corpus are inconsistent, so extraction is a best-effort, single-shot pattern
//! capture per field rather than a structured parse. A missing label yields an empty string (or
//! no year), never an error.
//!
//! ```
//! use folio::{corpus::Document, metadata::extract};
//!
//! let document = Document {
//!   id:       "pg1342.txt".into(),
//!   raw_text: "Title: Pride and Prejudice\nAuthor: Jane Austen\nRelease Date: June, 1998 [EBook #1342]\nLanguage: English".into(),
//! };
//! let record = extract(&document);
//!
//! assert_eq!(record.author, "Jane Austen");
//! assert_eq!(record.year, Some(1998));
//! assert_eq!(record.language, "English");
//! ```

use super::*;
use crate::corpus::Document;

/// ASCII whitespace after a label, then everything up to the next line terminator.
///
/// The leading whitespace may span blank lines, so an empty label picks up the following line.
macro_rules! label_pattern {
  ($label:literal) => {
    concat!($label, r"(?-u:\s)*([^\n\r\x{85}\x{2028}\x{2029}]*)")
  };
}

lazy_static! {
  /// `Author:` label followed by the rest of its line.
  static ref AUTHOR: Regex = Regex::new(label_pattern!("Author:")).unwrap();
  /// `Release Date:` label followed by the rest of its line.
  static ref RELEASE_DATE: Regex = Regex::new(label_pattern!("Release Date:")).unwrap();
  /// `Language:` label followed by the rest of its line.
  static ref LANGUAGE: Regex = Regex::new(label_pattern!("Language:")).unwrap();
  /// First run of four ASCII digits.
  static ref YEAR: Regex = Regex::new(r"([0-9]{4})").unwrap();
}

/// Header fields of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
  /// Id of the [`Document`] this was extracted from
  pub document_id: String,
  /// Text following `Author:`, empty when the label is absent
  pub author:      String,
  /// Text following `Release Date:`, empty when the label is absent
  pub release_raw: String,
  /// Text following `Language:`, empty when the label is absent
  pub language:    String,
  /// First four-digit run in `release_raw`
  pub year:        Option<i32>,
}

/// Number of records sharing one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
  /// Language as written in the header
  pub language: String,
  /// Number of documents declaring it
  pub count:    usize,
}

/// Extracts the header fields of a single document.
///
/// This is total: any input, including empty text, produces a record.
pub fn extract(document: &Document) -> MetadataRecord {
  let text = document.raw_text.as_str();
  let release_raw = capture(&RELEASE_DATE, text);
  let record = MetadataRecord {
    document_id: document.id.clone(),
    author: capture(&AUTHOR, text),
    year: parse_year(&release_raw),
    release_raw,
    language: capture(&LANGUAGE, text),
  };
  trace!(
    "{}: author={:?} year={:?} language={:?}",
    record.document_id,
    record.author,
    record.year,
    record.language
  );
  record
}

/// Extracts a record for every document, in the same order.
pub fn extract_all(documents: &[Document]) -> Vec<MetadataRecord> {
  let records: Vec<MetadataRecord> = documents.iter().map(extract).collect();
  let with_author = records.iter().filter(|r| !r.author.is_empty()).count();
  let with_year = records.iter().filter(|r| r.year.is_some()).count();
  info!(
    "Extracted metadata for {} documents ({} with author, {} with year)",
    records.len(),
    with_author,
    with_year
  );
  records
}

/// Parses the first four-digit run of a release date.
///
/// Returns `None` when there is no such run, e.g. for `""` or `"circa 20th century"`.
pub fn parse_year(release_raw: &str) -> Option<i32> {
  YEAR.captures(release_raw).and_then(|cap| cap.get(1)).and_then(|m| m.as_str().parse().ok())
}

/// Returns the first capture group of the first match, or an empty string.
fn capture(re: &Regex, text: &str) -> String {
  re.captures(text)
    .and_then(|cap| cap.get(1))
    .map(|m| m.as_str().to_string())
    .unwrap_or_default()
}

/// Counts records per non-empty language and keeps the `n` most frequent.
///
/// Sorted by count descending, then by language name.
pub fn top_languages(records: &[MetadataRecord], n: usize) -> Vec<LanguageCount> {
  let mut counts: HashMap<&str, usize> = HashMap::new();
  for record in records.iter().filter(|r| !r.language.is_empty()) {
    *counts.entry(record.language.as_str()).or_default() += 1;
  }

  let mut ranked: Vec<LanguageCount> = counts
    .into_iter()
    .map(|(language, count)| LanguageCount { language: language.to_string(), count })
    .collect();
  ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
  ranked.truncate(n);
  ranked
}

/// Fraction of documents whose text contains at least one character other than a line
/// terminator.
///
/// This is a presence check reported under the name "average title length"; it is not a length.
/// An empty corpus gives `0.0`.
pub fn text_presence_ratio(documents: &[Document]) -> f64 {
  if documents.is_empty() {
    return 0.0;
  }
  let present = documents.iter().filter(|d| has_visible_char(&d.raw_text)).count();
  present as f64 / documents.len() as f64
}

/// Whether `text` has any character that isn't a line terminator.
fn has_visible_char(text: &str) -> bool {
  text.chars().any(|c| !matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'))
}
