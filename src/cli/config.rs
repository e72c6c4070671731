//! Handler for the `config` subcommand.

use anyhow::Result;
use colored::Colorize;

use super::ConfigAction;
use crate::config::Config;

/// Executes a [`ConfigAction`].
pub(super) fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            let path = Config::config_path()?;
            println!("{} {}", "Config path:".bold(), path.display());
            println!();
            println!("{}", toml::to_string_pretty(&config.masked())?);
        }
    }
    Ok(())
}
