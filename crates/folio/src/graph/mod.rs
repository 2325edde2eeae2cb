//! Author influence graph.
//!
//! An earlier author is taken to have potentially influenced a later one when their books were
//! released at most `window` years apart. Construction is split into steps that can be checked on
//! their own:
//!
//! 1. [`author_years`]: distinct `(author, year)` pairs with a known author and year
//! 2. [`edges::candidates`]: every ordered pair passing [`edges::is_influence`]
//! 3. [`edges::dedup`]: one edge per ordered author pair, chosen by a [`DedupPolicy`]
//! 4. [`degree`]: in- and out-degree rankings over the surviving edges
//!
//! ```
//! use folio::graph::{AuthorYear, DedupPolicy, InfluenceGraph};
//!
//! let pairs = [
//!   AuthorYear::new("A", 1990),
//!   AuthorYear::new("B", 1993),
//!   AuthorYear::new("C", 2000),
//! ];
//! let graph = InfluenceGraph::build(pairs.into_iter().collect(), 5, DedupPolicy::SmallestGap);
//!
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.edges()[0].author1, "A");
//! assert_eq!(graph.edges()[0].author2, "B");
//! ```

use super::*;
use crate::metadata::MetadataRecord;

pub mod degree;
pub mod edges;

pub use self::{
  degree::DegreeRanking,
  edges::{DedupPolicy, InfluenceEdge},
};

/// A distinct author and release year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuthorYear {
  /// Author as written in the header, never empty
  pub author: String,
  /// Release year
  pub year:   i32,
}

impl AuthorYear {
  /// Creates a pair.
  pub fn new(author: impl Into<String>, year: i32) -> Self {
    Self { author: author.into(), year }
  }
}

/// Projects metadata records to the set of distinct `(author, year)` pairs.
///
/// Records with an empty author or without a year are skipped; duplicates collapse.
pub fn author_years(records: &[MetadataRecord]) -> BTreeSet<AuthorYear> {
  let pairs: BTreeSet<AuthorYear> = records
    .iter()
    .filter(|r| !r.author.is_empty())
    .filter_map(|r| r.year.map(|year| AuthorYear::new(r.author.as_str(), year)))
    .collect();
  debug!("{} distinct author/year pairs from {} records", pairs.len(), records.len());
  pairs
}

/// Deduplicated influence edges and their degree views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluenceGraph {
  /// Edges, unique per `(author1, author2)`, sorted by that pair
  edges: Vec<InfluenceEdge>,
}

impl InfluenceGraph {
  /// Builds the graph over `pairs` with the given window and dedup policy.
  pub fn build(pairs: BTreeSet<AuthorYear>, window: i32, policy: DedupPolicy) -> Self {
    let candidates = edges::candidates(&pairs, window);
    let candidate_count = candidates.len();
    let edges = edges::dedup(candidates, policy);
    info!(
      "Influence graph: {} pairs, {} candidate edges, {} after {:?} dedup (window {})",
      pairs.len(),
      candidate_count,
      edges.len(),
      policy,
      window
    );
    Self { edges }
  }

  /// Builds the graph straight from metadata records.
  pub fn from_records(records: &[MetadataRecord], window: i32, policy: DedupPolicy) -> Self {
    Self::build(author_years(records), window, policy)
  }

  /// All edges, sorted by `(author1, author2)`.
  pub fn edges(&self) -> &[InfluenceEdge] { &self.edges }

  /// Number of edges.
  pub fn edge_count(&self) -> usize { self.edges.len() }

  /// Authors ranked by incoming edges.
  pub fn in_degree(&self) -> Vec<DegreeRanking> { degree::in_degree(&self.edges) }

  /// Authors ranked by outgoing edges.
  pub fn out_degree(&self) -> Vec<DegreeRanking> { degree::out_degree(&self.edges) }
}
