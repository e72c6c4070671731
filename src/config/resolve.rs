//! Environment variable substitution and credential resolution.

use super::types::Config;

use crate::constants::{API_KEY_ENV, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, MAX_TOKENS, TEMPERATURE};

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields from the process environment.
    pub(super) fn resolve_substitutions(&mut self) {
        self.resolve_substitutions_with(|name| std::env::var(name).ok());
    }

    /// Resolve {env:VAR_NAME} patterns using `lookup` for variable values.
    /// Unset variables resolve to an empty string.
    pub(super) fn resolve_substitutions_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for field in [
            &mut self.model,
            &mut self.system_prompt,
            &mut self.openai.api_key,
            &mut self.openai.base_url,
        ] {
            if let Some(value) = field {
                *value = resolve_str(value, &lookup);
            }
        }
    }

    /// Resolve the OpenAI API key: env var first, then config value.
    ///
    /// Blank values count as absent, so an unresolved `{env:OPENAI_API_KEY}`
    /// placeholder yields `None`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key_with_env(std::env::var(API_KEY_ENV).ok())
    }

    pub(super) fn api_key_with_env(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                self.openai
                    .api_key
                    .clone()
                    .filter(|v| !v.trim().is_empty())
            })
    }

    /// Remote model identifier, or the built-in default.
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// System instruction for remote completions, or the built-in default.
    pub fn system_prompt(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }

    /// Output token budget for remote completions.
    pub fn max_tokens(&self) -> u64 {
        self.max_tokens.unwrap_or(MAX_TOKENS)
    }

    /// Sampling temperature for remote completions.
    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(TEMPERATURE)
    }
}

/// Replace {env:VAR} with the variable value.
///
/// Substituted text is not scanned again, so a value containing another
/// `{env:...}` pattern is kept literally.
fn resolve_str(s: &str, lookup: &impl Fn(&str) -> Option<String>) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(rel) = result[from..].find("{env:") {
        let start = from + rel;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let value = lookup(&result[start + 5..start + end]).unwrap_or_default();
        result = format!(
            "{}{}{}",
            &result[..start],
            value,
            &result[start + end + 1..]
        );
        from = start + value.len();
    }
    result
}
