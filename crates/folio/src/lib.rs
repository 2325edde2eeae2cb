//! Corpus analytics for digitized books.
//!
//! `folio` takes a corpus of plain-text books (Project Gutenberg style, with
//! `Author:` / `Release Date:` / `Language:` header lines) and produces:
//!
//! - One [`corpus::Document`] per source file, assembled from its lines
//! - A [`metadata::MetadataRecord`] per document, extracted from the free-text header
//! - TF-IDF weighted, hashed term vectors for every document
//! - A directed author influence graph built from release-year proximity, with in/out-degree
//!   rankings
//!
//! # Getting Started
//!
//! ```no_run
//! use folio::{analysis::Analysis, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::default().with_corpus("books/*.txt").with_window(5);
//!   let report = Analysis::new(config).run().await?;
//!
//!   println!("{} books, {} influence edges", report.document_count, report.edge_count);
//!   for ranking in &report.top_in_degree {
//!     println!("{}: {}", ranking.author, ranking.degree);
//!   }
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`corpus`]: Reading corpus files and assembling lines into documents
//! - [`metadata`]: Header field extraction and metadata aggregates
//! - [`features`]: Normalization, tokenization, stopwords, term hashing and IDF
//! - [`graph`]: Influence edges and degree rankings
//! - [`analysis`]: The end-to-end batch run and its [`analysis::Report`]
//! - [`config`]: Run configuration
//! - [`prelude`]: Common traits and types for ergonomic imports
//!
//! Every stage consumes an immutable input and returns a new value. The only global
//! synchronization point is the IDF fit, which sees the whole corpus before any document is
//! reweighted.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::{BTreeMap, BTreeSet, HashMap, HashSet},
  path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod graph;
pub mod metadata;

use crate::error::*;

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use folio::prelude::*;
///
/// async fn example() -> Result<(), FolioError> {
///   let report = Analysis::new(Config::default()).run().await?;
///   println!("{}", report.feature_schema.num_features);
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    analysis::{Analysis, Report},
    config::Config,
    error::FolioError,
    graph::DedupPolicy,
  };
}
