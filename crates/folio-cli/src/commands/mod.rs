//! Subcommands of the folio CLI and the configuration overrides they share.

use super::*;

pub mod analyze;
pub mod config;
pub mod init;

pub use analyze::analyze;
pub use config::show_config;
pub use init::init;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a default configuration file
  Init(InitOptions),

  /// Run the full pipeline over a corpus and print the report
  Analyze(AnalyzeOptions),

  /// Print the effective configuration after applying overrides
  Config(ConfigOverrides),
}

pub use analyze::AnalyzeOptions;
pub use init::InitOptions;

/// Per-run overrides of configuration file values.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigOverrides {
  /// Glob pattern selecting the corpus files, e.g. "books/*.txt"
  #[arg(long)]
  pub corpus: Option<String>,

  /// Influence window in years
  #[arg(long, short)]
  pub window: Option<i32>,

  /// Number of hashing buckets for the feature vectors
  #[arg(long)]
  pub num_features: Option<usize>,

  /// Rows in the metadata and edge samples
  #[arg(long)]
  pub sample_size: Option<usize>,

  /// Rows in the language and degree rankings
  #[arg(long = "top")]
  pub top_n: Option<usize>,

  /// Edge dedup policy (first_seen or smallest_gap)
  #[arg(long)]
  pub dedup: Option<DedupPolicy>,
}

impl ConfigOverrides {
  /// Applies every override that was given on top of `config`.
  pub fn apply(self, mut config: Config) -> Config {
    let ConfigOverrides { corpus, window, num_features, sample_size, top_n, dedup } = self;
    if let Some(corpus) = corpus {
      config = config.with_corpus(corpus);
    }
    if let Some(window) = window {
      config = config.with_window(window);
    }
    if let Some(num_features) = num_features {
      config = config.with_num_features(num_features);
    }
    if let Some(sample_size) = sample_size {
      config = config.with_sample_size(sample_size);
    }
    if let Some(top_n) = top_n {
      config = config.with_top_n(top_n);
    }
    if let Some(dedup) = dedup {
      config = config.with_dedup(dedup);
    }
    config
  }
}

/// Loads the configuration file of `cli` (defaults if absent) and applies `overrides`.
pub fn resolve_config(cli: &Cli, overrides: ConfigOverrides) -> Result<Config> {
  let path = cli.config_path();
  let config = overrides.apply(Config::load_or_default(&path)?);
  debug!("Effective configuration: {:?}", config);
  config.validate()?;
  Ok(config)
}
