//! Command line interface for the folio corpus analytics pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Write a default configuration file
//! folio init
//!
//! # Analyze a corpus with the configured settings
//! folio analyze
//!
//! # Override settings for one run
//! folio analyze --corpus "books/*.txt" --window 10 --num-features 4096
//!
//! # Machine readable output
//! folio analyze --corpus "books/*.txt" --json
//! ```
//!
//! Verbosity is raised with `-v` (repeatable) or set directly through `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use folio::{
  analysis::{Analysis, Report},
  config::Config,
  error::FolioError,
  graph::DedupPolicy,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Metadata, TF-IDF features and author influence graphs for book corpora")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default platform-specific config
  /// directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// The configuration file this invocation reads and writes.
  pub fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Entry point for the folio CLI application
///
/// Parses arguments, sets up logging and runs the requested command.
///
/// Exits with a failure status after printing the [`FolioCliError`] when the configuration is
/// invalid, the corpus pattern matches no files, or a prompt or file operation fails.
#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);
  trace!("Configuration path: {}", cli.config_path().display());

  let result = match cli.command.clone() {
    Commands::Init(init_options) => init(&cli, init_options).await,
    Commands::Analyze(analyze_options) => analyze(&cli, analyze_options).await,
    Commands::Config(overrides) => show_config(&cli, overrides).await,
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{} {}", style(ERROR_PREFIX).red(), style(e).red());
      ExitCode::FAILURE
    },
  }
}
