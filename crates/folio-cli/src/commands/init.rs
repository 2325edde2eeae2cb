//! Module for writing a fresh configuration file.

use super::*;

/// Options of [`Commands::Init`].
#[derive(Args, Clone, Debug)]
pub struct InitOptions {
  /// Values to write instead of the defaults
  #[command(flatten)]
  pub overrides: ConfigOverrides,
}

/// Function for the [`Commands::Init`] in the CLI.
pub async fn init(cli: &Cli, init_options: InitOptions) -> Result<()> {
  let InitOptions { overrides } = init_options;
  let path = cli.config_path();

  if path.exists()
    && !cli.confirm(&format!("A configuration already exists at {:?}, overwrite it?", path))?
  {
    cli.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass --config to write somewhere else",
    ))?;
    return Ok(());
  }

  let config = overrides.apply(Config::default());
  config.validate()?;
  config.save(&path)?;
  cli.reply(ResponseContent::Success(&format!(
    "Configuration initialized successfully at {}",
    path.display()
  )))?;
  cli.reply(ResponseContent::Config(&config))
}
