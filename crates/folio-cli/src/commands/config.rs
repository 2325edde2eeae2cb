//! Module for the "config" command.

use super::*;

/// Function for the [`Commands::Config`] in the CLI.
pub async fn show_config(cli: &Cli, overrides: ConfigOverrides) -> Result<()> {
  let config = resolve_config(cli, overrides)?;
  cli.reply(ResponseContent::Info(&format!("Read from {}", cli.config_path().display())))?;
  cli.reply(ResponseContent::Config(&config))
}
