//! Module for the "analyze" command, which runs the whole pipeline.

use super::*;

/// Options of [`Commands::Analyze`].
#[derive(Args, Clone, Debug)]
pub struct AnalyzeOptions {
  /// Print the report as JSON instead of formatted sections
  #[arg(long)]
  pub json: bool,

  /// Configuration overrides for this run
  #[command(flatten)]
  pub overrides: ConfigOverrides,
}

/// Function for the [`Commands::Analyze`] in the CLI.
pub async fn analyze(cli: &Cli, options: AnalyzeOptions) -> Result<()> {
  let AnalyzeOptions { json, overrides } = options;
  let config = resolve_config(cli, overrides)?;

  if !json {
    cli.reply(ResponseContent::Info(&format!("Analyzing corpus {}", config.corpus)))?;
  }
  let report: Report = Analysis::new(config).run().await?;

  if json {
    cli.reply(ResponseContent::Raw(&report.to_json()?))
  } else {
    cli.reply(ResponseContent::Report(&report))
  }
}
