//! Tests for config functionality.

use crate::config::{Config, FailurePolicy, types::DEFAULT_TIMEOUT_SECONDS};
use crate::error::PracfileError;
use crate::report::Section;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.service.model, "gemini-2.5-flash");
    assert_eq!(config.service.api_key_env, "API_KEY");
    assert_eq!(config.service.timeout_seconds, Some(DEFAULT_TIMEOUT_SECONDS));
    assert!(config.service.base_url.starts_with("https://"));
    assert_eq!(config.generation.max_concurrency, 7);
    assert_eq!(config.generation.on_failure, FailurePolicy::Abort);
    assert!(!config.document.escape_html);
    assert!(!config.document.preview);
    assert!(config.prompt_templates.is_empty());
    assert!(config.events_log.is_none());
    config.validate().unwrap();
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
service:
  model: gemini-2.5-pro
generation:
  on_failure: empty
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.service.model, "gemini-2.5-pro");
    assert_eq!(config.generation.on_failure, FailurePolicy::Empty);

    // Unspecified values keep their defaults
    assert_eq!(config.service.api_key_env, "API_KEY");
    assert_eq!(config.service.timeout_seconds, Some(DEFAULT_TIMEOUT_SECONDS));
    assert_eq!(config.generation.max_concurrency, 7);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
service:
  model: gemini-test
  base_url: http://localhost:9000/models
  api_key_env: GEMINI_API_KEY
  timeout_seconds: 30
  temperature: 0.2
  max_output_tokens: 512
generation:
  max_concurrency: 2
  on_failure: abort
document:
  escape_html: true
  preview: true
prompt_templates:
  theory: "Explain {aim} for {grade}."
  code_output: "Run {code} and show the output."
events_log: logs/events.ndjson
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.service.base_url, "http://localhost:9000/models");
    assert_eq!(config.service.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.service.timeout_seconds, Some(30));
    assert_eq!(config.service.temperature, Some(0.2));
    assert_eq!(config.service.max_output_tokens, Some(512));
    assert_eq!(config.generation.max_concurrency, 2);
    assert!(config.document.escape_html);
    assert!(config.document.preview);
    assert_eq!(
        config.prompt_templates.get(&Section::Theory).map(String::as_str),
        Some("Explain {aim} for {grade}.")
    );
    assert!(config.prompt_templates.contains_key(&Section::Output));
    assert_eq!(
        config.events_log.as_deref(),
        Some(std::path::Path::new("logs/events.ndjson"))
    );
}

#[test]
fn test_null_timeout_disables_timeout() {
    let config = Config::from_yaml("service:\n  timeout_seconds: null\n").unwrap();
    assert_eq!(config.service.timeout_seconds, None);
}

#[test]
fn test_zero_timeout_fails() {
    let err = Config::from_yaml("service:\n  timeout_seconds: 0\n").unwrap_err();
    assert!(matches!(err, PracfileError::ConfigError(_)));
    assert!(err.to_string().contains("timeout_seconds must be greater than 0"));
}

#[test]
fn test_zero_concurrency_fails() {
    let err = Config::from_yaml("generation:\n  max_concurrency: 0\n").unwrap_err();
    assert!(err.to_string().contains("max_concurrency must be greater than 0"));
}

#[test]
fn test_oversized_concurrency_fails() {
    let err =
        Config::from_yaml("generation:\n  max_concurrency: 18446744073709551615\n").unwrap_err();
    assert!(matches!(err, PracfileError::ConfigError(_)));
    assert!(err.to_string().contains("max_concurrency must be at most"));
}

#[test]
fn test_bad_base_url_fails() {
    let err = Config::from_yaml("service:\n  base_url: ftp://example.com\n").unwrap_err();
    assert!(err.to_string().contains("base_url must start with"));
}

#[test]
fn test_temperature_out_of_range_fails() {
    let err = Config::from_yaml("service:\n  temperature: 3.5\n").unwrap_err();
    assert!(err.to_string().contains("temperature must be between"));
}

#[test]
fn test_unknown_failure_policy_fails() {
    let err = Config::from_yaml("generation:\n  on_failure: retry\n").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_template_for_non_generated_section_fails() {
    let err = Config::from_yaml("prompt_templates:\n  aim: \"{aim}\"\n").unwrap_err();
    assert!(err.to_string().contains("never generated"));
}

#[test]
fn test_template_with_unknown_variable_fails() {
    let yaml = "prompt_templates:\n  conclusion: \"Conclude {topic}\"\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("prompt_templates.conclusion"));
    assert!(msg.contains("undefined variable 'topic'"));
    assert!(msg.contains("grade, subject, aim, code"));
}

#[test]
fn test_template_for_unknown_section_fails() {
    let err = Config::from_yaml("prompt_templates:\n  abstract: \"x\"\n").unwrap_err();
    assert!(err.to_string().contains("unknown section"));
}

#[test]
fn test_forward_compatibility() {
    let yaml = r#"
service:
  model: gemini-2.5-flash
future_setting: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.extra.contains_key("future_setting"));

    let round_trip = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert!(round_trip.extra.contains_key("future_setting"));
}

#[test]
fn test_failure_policy_from_str() {
    assert_eq!(FailurePolicy::from_str("abort"), Some(FailurePolicy::Abort));
    assert_eq!(FailurePolicy::from_str("empty"), Some(FailurePolicy::Empty));
    assert_eq!(FailurePolicy::from_str("skip"), None);
    assert_eq!(FailurePolicy::Empty.as_str(), "empty");
}

#[test]
fn test_load_or_default_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("pracfile.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_reports_read_errors() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pracfile.yaml");
    std::fs::write(&path, "document:\n  preview: true\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert!(config.document.preview);
}
