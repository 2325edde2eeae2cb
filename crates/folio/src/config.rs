//! Run configuration.
//!
//! A [`Config`] names the corpus to read and the tunables of each stage. It can be built in code
//! with the `with_*` setters, or loaded from a TOML file:
//!
//! ```toml
//! corpus = "books/*.txt"
//! window = 5
//! num_features = 10000
//! sample_size = 10
//! top_n = 5
//! dedup = "smallest_gap"
//! ```
//!
//! Any key left out of the file takes its default.

use super::*;
use crate::graph::DedupPolicy;

/// Default glob for the corpus files.
pub const DEFAULT_CORPUS: &str = "corpus/*.txt";
/// Default influence window in years.
pub const DEFAULT_WINDOW: i32 = 5;
/// Default number of hashing buckets.
pub const DEFAULT_NUM_FEATURES: usize = 10_000;
/// Default number of rows in the metadata and edge samples.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
/// Default number of rows in the language and degree rankings.
pub const DEFAULT_TOP_N: usize = 5;

/// Configuration for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Glob pattern selecting the corpus files
  pub corpus:       String,
  /// Maximum year gap (inclusive) for an earlier author to influence a later one
  pub window:       i32,
  /// Dimensionality of the hashed feature vectors
  pub num_features: usize,
  /// Number of metadata records and edges to include as samples in the report
  pub sample_size:  usize,
  /// Number of entries in the language and degree rankings
  pub top_n:        usize,
  /// How to pick one edge when an author pair satisfies the window more than once
  pub dedup:        DedupPolicy,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      corpus:       DEFAULT_CORPUS.to_string(),
      window:       DEFAULT_WINDOW,
      num_features: DEFAULT_NUM_FEATURES,
      sample_size:  DEFAULT_SAMPLE_SIZE,
      top_n:        DEFAULT_TOP_N,
      dedup:        DedupPolicy::default(),
    }
  }
}

impl Config {
  /// Returns the default location of the configuration file.
  ///
  /// - On Unix: `~/.config/folio/config.toml`
  /// - On macOS: `~/Library/Application Support/folio/config.toml`
  /// - On Windows: `%APPDATA%\folio\config.toml`
  /// - Fallback: `./folio/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("folio").join("config.toml")
  }

  /// Reads a configuration from a TOML file and validates it.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  /// Reads the configuration at `path` if it exists, otherwise returns the defaults.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Writes this configuration as TOML, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    info!("Wrote configuration to {}", path.display());
    Ok(())
  }

  /// Checks that every tunable is usable.
  pub fn validate(&self) -> Result<()> {
    if self.window < 1 {
      return Err(FolioError::Config(format!(
        "Influence window must be at least 1 year, got {}",
        self.window
      )));
    }
    if self.num_features == 0 {
      return Err(FolioError::Config("Feature dimensionality must be at least 1".to_string()));
    }
    if self.corpus.trim().is_empty() {
      return Err(FolioError::Config("Corpus pattern must not be empty".to_string()));
    }
    Ok(())
  }

  /// Sets the corpus glob pattern.
  pub fn with_corpus(mut self, corpus: impl Into<String>) -> Self {
    self.corpus = corpus.into();
    self
  }

  /// Sets the influence window in years.
  pub fn with_window(mut self, window: i32) -> Self {
    self.window = window;
    self
  }

  /// Sets the feature vector dimensionality.
  pub fn with_num_features(mut self, num_features: usize) -> Self {
    self.num_features = num_features;
    self
  }

  /// Sets the sample size used for metadata and edge samples.
  pub fn with_sample_size(mut self, sample_size: usize) -> Self {
    self.sample_size = sample_size;
    self
  }

  /// Sets the length of the language and degree rankings.
  pub fn with_top_n(mut self, top_n: usize) -> Self {
    self.top_n = top_n;
    self
  }

  /// Sets the edge dedup policy.
  pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
    self.dedup = dedup;
    self
  }
}
