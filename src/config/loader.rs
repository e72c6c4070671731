//! File loading and merging for kindabot configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::{Config, OpenAiConfig};

/// Written to `~/.config/kindabot/config.toml` on first run.
const DEFAULT_CONFIG_TOML: &str = r#"model = "gpt-3.5-turbo"

[openai]
api_key = "{env:OPENAI_API_KEY}"

# Extra keyword rules are checked after the built-in ones.
# [[rules]]
# keywords = ["delivery", "eta"]
# response = "Most orders arrive within 40 minutes."
"#;

impl Config {
    /// Loads the global config from `~/.config/kindabot/config.toml`.
    ///
    /// If no config file exists, creates one with defaults (including an
    /// `{env:VAR}` placeholder for the API key) and returns it.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, DEFAULT_CONFIG_TOML)
                .with_context(|| format!("Failed to write default config to {:?}", path))?;
            return Self::parse(DEFAULT_CONFIG_TOML)
                .with_context(|| "Failed to parse default config".to_string());
        }

        Self::load_file(&path)
    }

    /// Look for kindabot.toml in current dir, then walk up to git root.
    pub(super) fn load_project() -> Result<Option<Config>> {
        let mut dir = std::env::current_dir()?;
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Self::load_file(&candidate).map(Some);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config at {:?}", path))
    }

    /// Parses a TOML document into a [`Config`] without substitutions.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Merge project config over global config.
    /// Project values win when present; project rules follow global rules.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        let mut rules = global.rules;
        rules.extend(project.rules);
        Config {
            model: project.model.or(global.model),
            system_prompt: project.system_prompt.or(global.system_prompt),
            max_tokens: project.max_tokens.or(global.max_tokens),
            temperature: project.temperature.or(global.temperature),
            openai: OpenAiConfig {
                api_key: project.openai.api_key.or(global.openai.api_key),
                base_url: project.openai.base_url.or(global.openai.base_url),
            },
            rules,
        }
    }

    /// Applies the result of [`Config::load_project`] to `global`.
    ///
    /// A project file that cannot be read or parsed is logged and skipped.
    pub(super) fn overlay(global: Config, project: Result<Option<Config>>) -> Config {
        match project {
            Ok(Some(project)) => Self::merge(global, project),
            Ok(None) => global,
            Err(e) => {
                tracing::warn!("ignoring project config: {e:#}");
                global
            }
        }
    }
}
