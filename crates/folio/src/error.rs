//! Error types for the folio library.
//!
//! Only conditions that stop a run are errors. A book without an `Author:` line, a release date
//! without a year, or an empty file are all ordinary data and degrade to empty fields instead.
//!
//! # Examples
//!
//! ```no_run
//! use folio::{analysis::Analysis, config::Config, error::FolioError};
//!
//! # async fn example() -> Result<(), FolioError> {
//! let result = Analysis::new(Config::default().with_corpus("missing/*.txt")).run().await;
//! match result {
//!   Err(FolioError::NoCorpusMatches(pattern)) => println!("nothing matched {pattern}"),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(report) => println!("{} documents", report.document_count),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`folio`](crate) crate.
pub type Result<T> = core::result::Result<T, FolioError>;

/// Errors that can occur while running the corpus pipeline.
#[derive(Error, Debug)]
pub enum FolioError {
  /// The corpus pattern matched no files.
  ///
  /// This is the one input condition that aborts a run: there is nothing to analyze.
  #[error("No corpus files matched pattern \"{0}\"")]
  NoCorpusMatches(String),

  /// The corpus pattern is not a valid glob.
  #[error(transparent)]
  InvalidPattern(#[from] glob::PatternError),

  /// A path produced by the glob could not be inspected.
  #[error(transparent)]
  Glob(#[from] glob::GlobError),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - A corpus file can't be read
  /// - The configuration file can't be read or written
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file is not valid TOML for [`Config`](crate::config::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration couldn't be rendered as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The report couldn't be rendered as JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A corpus reading task panicked or was cancelled.
  #[error(transparent)]
  Join(#[from] tokio::task::JoinError),

  /// A deserialized sparse vector has unsorted, out-of-range, or mismatched entries.
  #[error("Invalid sparse vector: {0}")]
  InvalidVector(String),

  /// A configuration value is out of range.
  #[error("{0}")]
  Config(String),
}
