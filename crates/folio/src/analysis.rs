//! End-to-end batch run.
//!
//! [`Analysis`] wires the stages together: read corpus lines, assemble documents, extract
//! metadata, then feed full text to the feature pipeline and metadata to the influence graph.
//! Everything lands in a [`Report`], a plain serializable value for whoever displays it.

use chrono::{DateTime, Utc};

use super::*;
use crate::{
  config::Config,
  corpus::{CorpusLines, Document},
  features::{FeaturePipeline, FeatureSchema},
  graph::{DegreeRanking, InfluenceEdge, InfluenceGraph},
  metadata::{LanguageCount, MetadataRecord},
};

/// Aggregate results of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
  /// When the run finished
  pub generated_at:       DateTime<Utc>,
  /// Configuration the run used
  pub config:             Config,
  /// Lines read across all corpus files
  pub line_count:         usize,
  /// Documents after assembly
  pub document_count:     usize,
  /// First records, in document order
  pub metadata_sample:    Vec<MetadataRecord>,
  /// Most frequent non-empty languages
  pub top_languages:      Vec<LanguageCount>,
  /// Share of documents with any visible text ("average title length" sanity check)
  pub text_presence:      f64,
  /// Shape of the TF-IDF output
  pub feature_schema:     FeatureSchema,
  /// Deduplicated influence edges
  pub edge_count:         usize,
  /// First edges, sorted by author pair
  pub edge_sample:        Vec<InfluenceEdge>,
  /// Authors with the most incoming edges
  pub top_in_degree:      Vec<DegreeRanking>,
  /// Authors with the most outgoing edges
  pub top_out_degree:     Vec<DegreeRanking>,
}

impl Report {
  /// Renders the report as pretty-printed JSON.
  pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string_pretty(self)?) }
}

/// A configured pipeline run.
#[derive(Debug, Clone)]
pub struct Analysis {
  /// Run configuration
  config: Config,
}

impl Analysis {
  /// Creates a run for `config`.
  pub fn new(config: Config) -> Self { Self { config } }

  /// The configuration of this run.
  pub fn config(&self) -> &Config { &self.config }

  /// Reads the configured corpus and runs every stage.
  ///
  /// # Errors
  ///
  /// Fails before any stage runs if the configuration is invalid or the corpus pattern matches
  /// nothing. Once the corpus is read, the stages themselves can't fail.
  pub async fn run(&self) -> Result<Report> {
    self.config.validate()?;
    let lines = corpus::read_lines(&self.config.corpus).await?;
    self.run_on_lines(lines)
  }

  /// Runs every stage over lines that were already read.
  pub fn run_on_lines(&self, lines: CorpusLines) -> Result<Report> {
    let line_count = lines.lines.len();
    let documents = lines.into_documents();
    self.run_on_documents(line_count, &documents)
  }

  /// Runs every stage over assembled documents.
  pub fn run_on_documents(&self, line_count: usize, documents: &[Document]) -> Result<Report> {
    self.config.validate()?;
    let Config { window, num_features, sample_size, top_n, dedup, .. } = self.config.clone();
    info!("Analyzing {} documents ({} lines)", documents.len(), line_count);

    let records = metadata::extract_all(documents);
    let top_languages = metadata::top_languages(&records, top_n);
    let text_presence = metadata::text_presence_ratio(documents);

    let features = FeaturePipeline::new(num_features).run(documents);

    let graph = InfluenceGraph::from_records(&records, window, dedup);
    let mut top_in_degree = graph.in_degree();
    top_in_degree.truncate(top_n);
    let mut top_out_degree = graph.out_degree();
    top_out_degree.truncate(top_n);

    Ok(Report {
      generated_at: Utc::now(),
      config: self.config.clone(),
      line_count,
      document_count: documents.len(),
      metadata_sample: records.into_iter().take(sample_size).collect(),
      top_languages,
      text_presence,
      feature_schema: features.schema,
      edge_count: graph.edge_count(),
      edge_sample: graph.edges().iter().take(sample_size).cloned().collect(),
      top_in_degree,
      top_out_degree,
    })
  }
}
