//! Corpus reading and document assembly.
//!
//! The corpus arrives as a flat sequence of [`SourceLine`]s, one per line of every matched file,
//! each tagged with the file it came from. [`assemble`] folds those lines back into one
//! [`Document`] per source, keeping each file's lines in their original order.
//!
//! ```
//! use folio::corpus::{assemble, SourceLine};
//!
//! let lines = vec![
//!   SourceLine::new("a.txt", "Author: Jane Austen"),
//!   SourceLine::new("b.txt", "Language: French"),
//!   SourceLine::new("a.txt", "Release Date: 1998"),
//! ];
//! let documents = assemble(lines);
//!
//! assert_eq!(documents.len(), 2);
//! assert_eq!(documents[0].raw_text, "Author: Jane Austen\nRelease Date: 1998");
//! ```

use tokio::task::JoinSet;

use super::*;

/// A single line of the corpus tagged with its source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
  /// Identifier of the originating document (its path)
  pub source: String,
  /// Line content without its terminator
  pub line:   String,
}

impl SourceLine {
  /// Creates a line tagged with `source`.
  pub fn new(source: impl Into<String>, line: impl Into<String>) -> Self {
    Self { source: source.into(), line: line.into() }
  }
}

/// The full text of one corpus file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  /// Source identifier, unique within a corpus
  pub id:       String,
  /// Newline-joined lines of the source, in file order
  pub raw_text: String,
}

/// Everything read from the corpus files, before assembly.
#[derive(Debug, Clone, Default)]
pub struct CorpusLines {
  /// Every matched source, including ones without any lines
  pub sources: Vec<String>,
  /// Every line of every source, in file order
  pub lines:   Vec<SourceLine>,
}

impl CorpusLines {
  /// Assembles the lines into documents, keeping an empty document for every line-less source.
  pub fn into_documents(self) -> Vec<Document> { assemble_with_sources(self.sources, self.lines) }
}

/// Groups lines by source into one [`Document`] per distinct source.
///
/// Lines of the same source keep their relative order and are joined with `\n`. The order of
/// sources in the input doesn't matter; documents come back sorted by id.
pub fn assemble(lines: impl IntoIterator<Item = SourceLine>) -> Vec<Document> {
  assemble_with_sources(std::iter::empty::<String>(), lines)
}

/// Like [`assemble`], but every entry of `sources` yields a document even when no line names it.
///
/// A source without lines becomes a document with empty text, which later stages treat as a
/// header with no fields and a body with no terms.
pub fn assemble_with_sources(
  sources: impl IntoIterator<Item = String>,
  lines: impl IntoIterator<Item = SourceLine>,
) -> Vec<Document> {
  let mut grouped: BTreeMap<String, Vec<String>> =
    sources.into_iter().map(|source| (source, Vec::new())).collect();

  for SourceLine { source, line } in lines {
    grouped.entry(source).or_default().push(line);
  }

  let documents: Vec<Document> = grouped
    .into_iter()
    .map(|(id, lines)| Document { id, raw_text: lines.join("\n") })
    .collect();
  debug!("Assembled {} documents", documents.len());
  documents
}

/// Reads every file matching `pattern` and splits it into [`SourceLine`]s.
///
/// Paths are visited in sorted order and read concurrently. Files that aren't valid UTF-8 are
/// decoded lossily. `\n`, `\r` and `\r\n` each terminate a line.
///
/// # Errors
///
/// - [`FolioError::InvalidPattern`] if `pattern` isn't a valid glob
/// - [`FolioError::NoCorpusMatches`] if no file matches
/// - [`FolioError::Path`] if a matched file can't be read
pub async fn read_lines(pattern: &str) -> Result<CorpusLines> {
  let mut paths = Vec::new();
  for entry in glob::glob(pattern)? {
    let path = entry?;
    if path.is_file() {
      paths.push(path);
    }
  }
  if paths.is_empty() {
    return Err(FolioError::NoCorpusMatches(pattern.to_string()));
  }
  paths.sort();
  info!("Reading {} corpus files matching {}", paths.len(), pattern);

  let mut tasks = JoinSet::new();
  for (index, path) in paths.into_iter().enumerate() {
    tasks.spawn(async move {
      let bytes = tokio::fs::read(&path).await?;
      Ok::<_, FolioError>((index, path, bytes))
    });
  }

  let mut files = Vec::with_capacity(tasks.len());
  while let Some(joined) = tasks.join_next().await {
    files.push(joined??);
  }
  files.sort_by_key(|(index, ..)| *index);

  let mut corpus = CorpusLines::default();
  for (_, path, bytes) in files {
    let source = path.display().to_string();
    let text = decode(&path, bytes);
    let before = corpus.lines.len();
    corpus.lines.extend(split_lines(&text).map(|line| SourceLine::new(source.as_str(), line)));
    debug!("{}: {} lines", source, corpus.lines.len() - before);
    corpus.sources.push(source);
  }
  info!("Read {} lines from {} files", corpus.lines.len(), corpus.sources.len());
  Ok(corpus)
}

/// Splits `text` on `\n`, `\r` or `\r\n`. A trailing terminator doesn't start another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
  let mut rest = text;
  std::iter::from_fn(move || {
    if rest.is_empty() {
      return None;
    }
    match rest.find(|c: char| c == '\n' || c == '\r') {
      Some(end) => {
        let line = &rest[..end];
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
        Some(line)
      },
      None => Some(std::mem::take(&mut rest)),
    }
  })
}

/// Decodes file contents, falling back to lossy UTF-8.
fn decode(path: &Path, bytes: Vec<u8>) -> String {
  match String::from_utf8(bytes) {
    Ok(text) => text,
    Err(e) => {
      warn!("{} is not valid UTF-8, decoding lossily", path.display());
      String::from_utf8_lossy(e.as_bytes()).into_owned()
    },
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_assemble_preserves_line_order() {
    let lines = vec![
      SourceLine::new("a", "one"),
      SourceLine::new("b", "x"),
      SourceLine::new("a", "two"),
      SourceLine::new("a", ""),
      SourceLine::new("a", "three"),
    ];
    let documents = assemble(lines);

    assert_eq!(documents, vec![
      Document { id: "a".into(), raw_text: "one\ntwo\n\nthree".into() },
      Document { id: "b".into(), raw_text: "x".into() },
    ]);
  }

  #[test]
  fn test_assemble_ignores_cross_document_order() {
    let first = vec![SourceLine::new("a", "1"), SourceLine::new("b", "2"), SourceLine::new("a", "3")];
    let second =
      vec![SourceLine::new("b", "2"), SourceLine::new("a", "1"), SourceLine::new("a", "3")];

    assert_eq!(assemble(first.clone()), assemble(second));
    assert_eq!(assemble(first.clone()), assemble(first));
  }

  #[test]
  fn test_sources_without_lines_become_empty_documents() {
    let documents =
      assemble_with_sources(vec!["empty".to_string()], vec![SourceLine::new("full", "text")]);

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0], Document { id: "empty".into(), raw_text: String::new() });
    assert_eq!(documents[1].raw_text, "text");
  }

  #[traced_test]
  #[tokio::test]
  async fn test_read_lines() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("b.txt"), "Author: B\r\nsecond line\r\n").unwrap();
    std::fs::write(dir.path().join("a.txt"), "Author: A\nLanguage: English\n").unwrap();
    std::fs::write(dir.path().join("empty.txt"), "").unwrap();
    std::fs::write(dir.path().join("skip.md"), "not matched").unwrap();

    let pattern = format!("{}/*.txt", dir.path().display());
    let corpus = read_lines(&pattern).await.unwrap();

    assert_eq!(corpus.sources.len(), 3);
    assert_eq!(corpus.lines.len(), 4);
    assert_eq!(corpus.lines[0].line, "Author: A");
    assert_eq!(corpus.lines[2].line, "Author: B");

    let documents = corpus.into_documents();
    assert_eq!(documents.len(), 3);
    assert!(documents.iter().any(|d| d.raw_text == "Author: B\nsecond line"));
    assert!(documents.iter().any(|d| d.raw_text.is_empty()));
  }

  #[test]
  fn test_split_lines_on_every_terminator() {
    let lines: Vec<&str> = split_lines("Author: A\rLanguage: English\r\n\nbody\n").collect();
    assert_eq!(lines, vec!["Author: A", "Language: English", "", "body"]);
    assert_eq!(split_lines("").count(), 0);
    assert_eq!(split_lines("\r\r").collect::<Vec<_>>(), vec!["", ""]);
  }

  #[tokio::test]
  async fn test_read_lines_splits_on_lone_carriage_return() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("mac.txt"), "Author: A\rLanguage: English\r").unwrap();

    let corpus = read_lines(&format!("{}/*.txt", dir.path().display())).await.unwrap();
    let lines: Vec<&str> = corpus.lines.iter().map(|l| l.line.as_str()).collect();
    assert_eq!(lines, vec!["Author: A", "Language: English"]);
  }

  #[tokio::test]
  async fn test_read_lines_without_matches() {
    let dir = tempdir().unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    let err = read_lines(&pattern).await.unwrap_err();
    assert!(matches!(err, FolioError::NoCorpusMatches(p) if p == pattern));
  }

  #[tokio::test]
  async fn test_read_lines_lossy_decode() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("latin1.txt"), b"Author: Andr\xe9\n").unwrap();

    let corpus = read_lines(&format!("{}/*.txt", dir.path().display())).await.unwrap();
    assert_eq!(corpus.lines[0].line, "Author: Andr\u{FFFD}");
  }
}
