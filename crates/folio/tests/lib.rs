use std::{error::Error, path::Path};

use folio::{
  analysis::{Analysis, Report},
  config::Config,
  error::FolioError,
  graph::{DedupPolicy, InfluenceEdge},
};
use tempfile::{tempdir, TempDir};
use tracing_test::traced_test;

mod workflows;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

/// A book with a Project Gutenberg style header and a short body.
pub fn book(author: &str, release: &str, language: &str, body: &str) -> String {
  format!(
    "The Project Gutenberg EBook\r\n\r\nTitle: Untitled\r\n\r\nAuthor: {author}\r\n\r\nRelease \
     Date: {release}\r\n\r\nLanguage: {language}\r\n\r\n*** START OF THIS PROJECT GUTENBERG EBOOK \
     ***\r\n\r\n{body}\r\n"
  )
}

/// Writes `books` into a fresh directory as `<name>.txt` files.
pub fn create_corpus(books: &[(&str, String)]) -> TempDir {
  let dir = tempdir().unwrap();
  for (name, text) in books {
    std::fs::write(dir.path().join(format!("{name}.txt")), text).unwrap();
  }
  dir
}

/// Glob pattern matching every `.txt` file in `dir`.
pub fn txt_pattern(dir: &Path) -> String { format!("{}/*.txt", dir.display()) }
