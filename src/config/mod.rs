//! Configuration types and path resolution for kindabot.
//!
//! Kindabot stores its settings as TOML at the platform's XDG config path
//! (e.g. `~/.config/kindabot/config.toml` on Linux). A `kindabot.toml` found
//! between the working directory and the git root overlays it.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;
pub use types::RuleEntry;

use anyhow::Result;

impl Config {
    /// Load config with precedence: project > global > defaults.
    /// Creates default config file if none exists. A broken project file
    /// is skipped with a warning; a broken global file is an error.
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let mut config = Self::overlay(global, Self::load_project());
        config.resolve_substitutions();
        Ok(config)
    }

    /// Returns a copy safe to print, with the API key replaced by asterisks.
    pub fn masked(&self) -> Self {
        let mut config = self.clone();
        if let Some(ref mut key) = config.openai.api_key {
            if !key.is_empty() {
                *key = "********".to_string();
            }
        }
        config
    }
}

#[cfg(test)]
mod tests;
