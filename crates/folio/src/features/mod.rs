//! Lexical feature pipeline.
//!
//! Every document goes through the same chain of pure transforms:
//!
//! 1. [`text::normalize`]: lowercase, keep only `a`-`z` and whitespace
//! 2. [`text::tokenize`]: split on whitespace, dropping empty tokens
//! 3. [`StopWords::remove`]: drop standard English stopwords
//! 4. [`HashingTf::transform`]: count terms into a fixed number of buckets
//! 5. [`IdfModel::transform`]: reweight counts by inverse document frequency
//!
//! Steps 1-4 are independent per document. Step 5 needs an [`IdfModel`] fitted on the output of
//! step 4 for the whole corpus first, so [`FeaturePipeline::run`] makes two passes.
//!
//! ```
//! use folio::{corpus::Document, features::FeaturePipeline};
//!
//! let documents = vec![
//!   Document { id: "a".into(), raw_text: "Call me Ishmael.".into() },
//!   Document { id: "b".into(), raw_text: String::new() },
//! ];
//! let features = FeaturePipeline::new(10_000).run(&documents);
//!
//! assert_eq!(features.vectors.len(), 2);
//! assert!(features.vectors.iter().all(|v| v.features.size() == 10_000));
//! assert_eq!(features.vectors[1].features.nnz(), 0);
//! ```

use super::*;
use crate::corpus::Document;

pub mod hashing;
pub mod idf;
pub mod stopwords;
pub mod text;
pub mod vector;

pub use self::{
  hashing::HashingTf,
  idf::{Idf, IdfModel},
  stopwords::StopWords,
  vector::SparseVector,
};

/// A document after the per-document stages, before IDF weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDocument {
  /// Id of the source [`Document`]
  pub document_id:    String,
  /// Normalized text
  pub clean_text:     String,
  /// Tokens of `clean_text`
  pub words:          Vec<String>,
  /// `words` without stopwords
  pub filtered_words: Vec<String>,
  /// Hashed term frequencies of `filtered_words`
  pub raw_features:   SparseVector,
}

/// The weighted feature vector of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
  /// Id of the source [`Document`]
  pub document_id: String,
  /// TF-IDF weights, one dimension per bucket
  pub features:    SparseVector,
}

/// One column of the feature table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureColumn {
  /// Column name
  pub name:      String,
  /// Column type, e.g. `string` or `vector[10000]`
  pub data_type: String,
}

/// Shape of the feature table, as handed to reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
  /// Columns in pipeline order
  pub columns:      Vec<FeatureColumn>,
  /// Dimensionality of every feature vector
  pub num_features: usize,
  /// Number of rows (documents)
  pub num_rows:     usize,
}

impl FeatureSchema {
  /// Schema of a pipeline producing `num_features`-dimensional vectors for `num_rows` documents.
  pub fn new(num_features: usize, num_rows: usize) -> Self {
    let vector = format!("vector[{num_features}]");
    let columns = [
      ("document_id", "string"),
      ("text", "string"),
      ("clean_text", "string"),
      ("words", "array<string>"),
      ("filtered_words", "array<string>"),
      ("raw_features", vector.as_str()),
      ("features", vector.as_str()),
    ]
    .into_iter()
    .map(|(name, data_type)| FeatureColumn {
      name:      name.to_string(),
      data_type: data_type.to_string(),
    })
    .collect();
    Self { columns, num_features, num_rows }
  }
}

/// Output of a full pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
  /// One weighted vector per input document, in input order
  pub vectors: Vec<FeatureVector>,
  /// The IDF weights fitted on the corpus
  pub model:   IdfModel,
  /// Shape of the output table
  pub schema:  FeatureSchema,
}

/// The configured chain of feature stages.
#[derive(Debug, Clone)]
pub struct FeaturePipeline {
  /// Stopwords to drop after tokenization
  stopwords: StopWords,
  /// Term hasher
  hashing:   HashingTf,
  /// IDF estimator
  idf:       Idf,
}

impl FeaturePipeline {
  /// A pipeline hashing into `num_features` buckets with the English stopword list.
  ///
  /// # Panics
  ///
  /// Panics if `num_features` is zero; [`Config::validate`](crate::config::Config::validate)
  /// rejects that value up front.
  pub fn new(num_features: usize) -> Self {
    Self { stopwords: StopWords::english(), hashing: HashingTf::new(num_features), idf: Idf::new() }
  }

  /// Replaces the stopword list.
  pub fn with_stopwords(mut self, stopwords: StopWords) -> Self {
    self.stopwords = stopwords;
    self
  }

  /// Replaces the IDF estimator.
  pub fn with_idf(mut self, idf: Idf) -> Self {
    self.idf = idf;
    self
  }

  /// Dimensionality of the produced vectors.
  pub fn num_features(&self) -> usize { self.hashing.num_features() }

  /// Runs the per-document stages (normalize, tokenize, stopwords, hashing), keeping every
  /// intermediate column.
  pub fn prepare(&self, document: &Document) -> PreparedDocument {
    let clean_text = text::normalize(&document.raw_text);
    let words = text::tokenize(&clean_text);
    let filtered_words = self.stopwords.remove(&words);
    let raw_features = self.hashing.transform(&filtered_words);
    trace!(
      "{}: {} tokens, {} after stopwords, {} buckets",
      document.id,
      words.len(),
      filtered_words.len(),
      raw_features.nnz()
    );
    PreparedDocument {
      document_id: document.id.clone(),
      clean_text,
      words,
      filtered_words,
      raw_features,
    }
  }

  /// Fits IDF weights on prepared documents.
  pub fn fit(&self, prepared: &[PreparedDocument]) -> IdfModel {
    self.idf.fit(prepared.iter().map(|p| &p.raw_features), self.num_features())
  }

  /// Hashed term frequencies of one document, dropping the intermediate columns as it goes.
  pub fn raw_features(&self, document: &Document) -> SparseVector {
    let words = text::tokenize(&text::normalize(&document.raw_text));
    self.hashing.transform(&self.stopwords.remove(&words))
  }

  /// Runs every stage over the corpus: hash all documents, fit IDF, then reweight.
  ///
  /// Only the hashed term frequencies are held across the IDF fit.
  pub fn run(&self, documents: &[Document]) -> FeatureSet {
    let raw: Vec<SparseVector> = documents.iter().map(|d| self.raw_features(d)).collect();
    let model = self.idf.fit(&raw, self.num_features());
    let vectors = documents
      .iter()
      .zip(&raw)
      .map(|(d, features)| FeatureVector {
        document_id: d.id.clone(),
        features:    model.transform(features),
      })
      .collect();
    let schema = FeatureSchema::new(self.num_features(), documents.len());
    info!("Built {} feature vectors of dimension {}", schema.num_rows, schema.num_features);
    FeatureSet { vectors, model, schema }
  }
}

impl Default for FeaturePipeline {
  fn default() -> Self { Self::new(crate::config::DEFAULT_NUM_FEATURES) }
}
