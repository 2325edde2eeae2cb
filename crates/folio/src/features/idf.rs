//! Inverse document frequency weighting.
//!
//! Weighting is a two-phase protocol. [`Idf::fit`] folds over every term-frequency vector of the
//! corpus and returns an immutable [`IdfModel`]; [`IdfModel::transform`] then reweights any single
//! vector without further corpus access.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use folio::features::{idf::Idf, vector::SparseVector};
//!
//! let tf = vec![
//!   SparseVector::from_entries(4, BTreeMap::from([(0, 2.0), (1, 1.0)])),
//!   SparseVector::from_entries(4, BTreeMap::from([(0, 1.0)])),
//! ];
//! let model = Idf::new().fit(&tf, 4);
//!
//! // Bucket 1 appears in fewer documents, so it weighs more.
//! assert!(model.weight(1) > model.weight(0));
//! let weighted = model.transform(&tf[0]);
//! assert_eq!(weighted.get(1), model.weight(1));
//! ```

use super::*;

/// IDF estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Idf {
  /// Buckets seen in fewer documents than this get a zero weight
  min_doc_freq: u64,
}

/// Fitted IDF weights, one per bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfModel {
  /// Number of documents the model was fitted on
  document_count:     u64,
  /// Number of documents with a non-zero count, per bucket
  document_frequency: Vec<u64>,
  /// `ln((N + 1) / (df + 1))` per bucket
  weights:            Vec<f64>,
}

impl Idf {
  /// An estimator keeping every bucket.
  pub fn new() -> Self { Self::default() }

  /// Zeroes the weight of buckets seen in fewer than `min_doc_freq` documents.
  pub fn with_min_doc_freq(mut self, min_doc_freq: u64) -> Self {
    self.min_doc_freq = min_doc_freq;
    self
  }

  /// Accumulates document frequencies over the whole corpus and derives the weights.
  ///
  /// Vectors whose size differs from `num_features` only contribute their in-range buckets.
  pub fn fit<'a>(
    &self,
    vectors: impl IntoIterator<Item = &'a SparseVector>,
    num_features: usize,
  ) -> IdfModel {
    let mut document_frequency = vec![0u64; num_features];
    let mut document_count = 0u64;
    for vector in vectors {
      document_count += 1;
      for (index, value) in vector.iter() {
        if value > 0.0 && index < num_features {
          document_frequency[index] += 1;
        }
      }
    }

    let weights = document_frequency
      .iter()
      .map(|&df| {
        if df < self.min_doc_freq {
          0.0
        } else {
          ((document_count as f64 + 1.0) / (df as f64 + 1.0)).ln()
        }
      })
      .collect();
    debug!(
      "Fitted IDF over {} documents, {} buckets observed",
      document_count,
      document_frequency.iter().filter(|&&df| df > 0).count()
    );
    IdfModel { document_count, document_frequency, weights }
  }
}

impl IdfModel {
  /// Number of documents seen during fitting.
  pub fn document_count(&self) -> u64 { self.document_count }

  /// Number of buckets.
  pub fn num_features(&self) -> usize { self.weights.len() }

  /// Number of fitted documents with a non-zero count in `index`.
  pub fn document_frequency(&self, index: usize) -> u64 {
    self.document_frequency.get(index).copied().unwrap_or(0)
  }

  /// Weight of bucket `index`, zero outside the model.
  pub fn weight(&self, index: usize) -> f64 { self.weights.get(index).copied().unwrap_or(0.0) }

  /// All weights, indexed by bucket.
  pub fn weights(&self) -> &[f64] { &self.weights }

  /// Multiplies every stored term frequency by its bucket weight.
  pub fn transform(&self, term_frequencies: &SparseVector) -> SparseVector {
    term_frequencies.map_values(|index, value| value * self.weight(index))
  }
}
