//! Struct definitions and serde defaults for kindabot configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for kindabot, deserialized from `config.toml`.
///
/// Fields left out of the file stay `None` so an overlay can tell "unset"
/// apart from "set to the default"; accessors such as [`Config::model`]
/// fill in the built-in values.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Remote model identifier (e.g. `"gpt-3.5-turbo"`).
    #[serde(default)]
    pub model: Option<String>,
    /// System instruction sent with every remote completion.
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Output token budget for remote completions.
    #[serde(default)]
    pub max_tokens: Option<u64>,
    /// Sampling temperature for remote completions.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// OpenAI connection settings.
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Extra keyword rules appended after the built-in table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleEntry>,
}

/// Connection details for the OpenAI API.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OpenAiConfig {
    /// API key for authentication. `OPENAI_API_KEY` takes precedence.
    pub api_key: Option<String>,
    /// Custom base URL for an OpenAI-compatible endpoint.
    pub base_url: Option<String>,
}

/// A keyword rule declared in the config file.
///
/// ```toml
/// [[rules]]
/// keywords = ["delivery", "eta"]
/// response = "Most orders arrive within 40 minutes."
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RuleEntry {
    pub keywords: Vec<String>,
    pub response: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: None,
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            openai: OpenAiConfig::default(),
            rules: Vec::new(),
        }
    }
}
