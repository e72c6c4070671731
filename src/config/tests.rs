use super::*;
use anyhow::Context;

#[test]
fn test_empty_document_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert!(config.model.is_none());
    assert_eq!(config.model(), crate::constants::DEFAULT_MODEL);
    assert_eq!(config.system_prompt(), crate::constants::DEFAULT_SYSTEM_PROMPT);
    assert_eq!(config.max_tokens(), 200);
    assert!((config.temperature() - 0.7).abs() < f64::EPSILON);
    assert!(config.openai.api_key.is_none());
    assert!(config.rules.is_empty());
}

#[test]
fn test_parse_full_document() {
    let config = Config::parse(
        r#"
model = "gpt-4o-mini"
max_tokens = 64
temperature = 0.2

[openai]
api_key = "sk-test"
base_url = "http://localhost:8080/v1"

[[rules]]
keywords = ["delivery", "ETA"]
response = "Most orders arrive within 40 minutes."
"#,
    )
    .unwrap();
    assert_eq!(config.model(), "gpt-4o-mini");
    assert_eq!(config.max_tokens(), 64);
    assert_eq!(config.openai.base_url.as_deref(), Some("http://localhost:8080/v1"));
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].keywords, vec!["delivery", "ETA"]);
}

#[test]
fn test_malformed_document_is_an_error() {
    assert!(Config::parse("model = [").is_err());
}

#[test]
fn test_env_substitution() {
    let mut config = Config::parse(
        r#"
[openai]
api_key = "{env:TEST_KEY}"
base_url = "http://{env:HOST}/v1"
"#,
    )
    .unwrap();
    config.resolve_substitutions_with(|name| match name {
        "TEST_KEY" => Some("sk-from-env".to_string()),
        _ => None,
    });
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-from-env"));
    assert_eq!(config.openai.base_url.as_deref(), Some("http:///v1"));
}

#[test]
fn test_substituted_value_is_not_expanded_again() {
    let mut config = Config::parse("[openai]\napi_key = \"{env:OPENAI_API_KEY}\"\n").unwrap();
    config.resolve_substitutions_with(|_| Some("{env:OPENAI_API_KEY}".to_string()));
    assert_eq!(config.openai.api_key.as_deref(), Some("{env:OPENAI_API_KEY}"));
}

#[test]
fn test_mutually_referencing_variables_terminate() {
    let mut config = Config::parse(
        r#"
model = "{env:A}-{env:B}"
[openai]
base_url = "{env:A}"
"#,
    )
    .unwrap();
    config.resolve_substitutions_with(|name| match name {
        "A" => Some("{env:B}".to_string()),
        "B" => Some("{env:A}".to_string()),
        _ => None,
    });
    assert_eq!(config.model(), "{env:B}-{env:A}");
    assert_eq!(config.openai.base_url.as_deref(), Some("{env:B}"));
}

#[test]
fn test_unresolved_placeholder_means_no_key() {
    let mut config = Config::parse("[openai]\napi_key = \"{env:OPENAI_API_KEY}\"\n").unwrap();
    config.resolve_substitutions_with(|_| None);
    assert_eq!(config.api_key_with_env(None), None);
}

#[test]
fn test_env_key_wins_over_config_key() {
    let config = Config::parse("[openai]\napi_key = \"sk-file\"\n").unwrap();
    assert_eq!(
        config.api_key_with_env(Some("sk-env".to_string())).as_deref(),
        Some("sk-env")
    );
    assert_eq!(
        config.api_key_with_env(Some("   ".to_string())).as_deref(),
        Some("sk-file")
    );
}

#[test]
fn test_merge_project_over_global() {
    let global = Config::parse(
        r#"
model = "gpt-4o"
temperature = 0.5
[openai]
api_key = "sk-global"
[[rules]]
keywords = ["vegan"]
response = "We have vegan pasta."
"#,
    )
    .unwrap();
    let project = Config::parse(
        r#"
max_tokens = 50
[[rules]]
keywords = ["halal"]
response = "Ask the restaurant."
"#,
    )
    .unwrap();

    let merged = Config::merge(global, project);
    assert_eq!(merged.model(), "gpt-4o");
    assert_eq!(merged.max_tokens(), 50);
    assert!((merged.temperature() - 0.5).abs() < f64::EPSILON);
    assert_eq!(merged.openai.api_key.as_deref(), Some("sk-global"));
    let keywords: Vec<_> = merged.rules.iter().map(|r| r.keywords[0].as_str()).collect();
    assert_eq!(keywords, vec!["vegan", "halal"]);
}

#[test]
fn test_project_default_model_overrides_global() {
    let global = Config::parse("model = \"gpt-4o\"\nsystem_prompt = \"Be terse.\"\n").unwrap();
    let project = Config::parse(&format!(
        "model = \"{}\"\nsystem_prompt = \"{}\"\n",
        crate::constants::DEFAULT_MODEL,
        crate::constants::DEFAULT_SYSTEM_PROMPT
    ))
    .unwrap();

    let merged = Config::merge(global, project);
    assert_eq!(merged.model(), crate::constants::DEFAULT_MODEL);
    assert_eq!(merged.system_prompt(), crate::constants::DEFAULT_SYSTEM_PROMPT);
}

#[test]
fn test_broken_project_file_keeps_global() {
    let global = Config::parse(
        r#"
[openai]
api_key = "sk-global"
[[rules]]
keywords = ["vegan"]
response = "We have vegan pasta."
"#,
    )
    .unwrap();
    let project = Config::parse("model = [").context("Failed to parse config at \"kindabot.toml\"");

    let config = Config::overlay(global, project.map(Some));
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-global"));
    assert_eq!(config.rules.len(), 1);
}

#[test]
fn test_missing_project_file_keeps_global() {
    let global = Config::parse("model = \"gpt-4o\"\n").unwrap();
    let config = Config::overlay(global, Ok(None));
    assert_eq!(config.model(), "gpt-4o");
}

#[test]
fn test_masked_hides_key() {
    let config = Config::parse("[openai]\napi_key = \"sk-secret\"\n").unwrap();
    let shown = toml::to_string_pretty(&config.masked()).unwrap();
    assert!(!shown.contains("sk-secret"));
    assert!(shown.contains("********"));
}
