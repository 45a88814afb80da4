// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the TeachAssist configuration system.

use std::io::Write;

use teachassist_config::diagnostic::ConfigError;
use teachassist_config::model::TeachAssistConfig;
use teachassist_config::{load_and_validate_str, load_config_from_path, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[agent]
name = "tutor"
log_level = "debug"
history_turns = 4

[anthropic]
api_key = "sk-ant-123"
default_model = "claude-3-5-haiku-20241022"
max_tokens = 512
temperature = 0.1

[routing]
llm_fallback = false
classifier_max_tokens = 5

[memory]
knowledge_base_id = "ABCDEF1234"
min_score = 0.4
max_results = 3

[hotel]
api_key = "airtrotter-key"
language = "de"
rows = 50

[images]
per_page = 5
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "tutor");
    assert_eq!(config.agent.history_turns, 4);
    assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-ant-123"));
    assert_eq!(config.anthropic.max_tokens, 512);
    assert!(!config.routing.llm_fallback);
    assert_eq!(config.routing.classifier_max_tokens, 5);
    assert_eq!(config.memory.knowledge_base_id.as_deref(), Some("ABCDEF1234"));
    assert_eq!(config.memory.min_score, 0.4);
    assert_eq!(config.memory.max_results, 3);
    assert_eq!(config.hotel.api_key.as_deref(), Some("airtrotter-key"));
    assert_eq!(config.hotel.language, "de");
    assert_eq!(config.hotel.rows, 50);
    assert_eq!(config.hotel.base_url, "https://airtrotterapi.com/rest");
    assert_eq!(config.images.per_page, 5);
    assert_eq!(config.images.base_url, "https://api.unsplash.com");
}

#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "TeachAssist");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.agent.history_turns, 6);
    assert!(config.anthropic.api_key.is_none());
    assert!(config.memory.knowledge_base_id.is_none());
    assert_eq!(config.memory.fallback_knowledge_base_id, "demokb123");
    assert_eq!(config.memory.min_score, 0.6);
    assert_eq!(config.memory.max_results, 5);
    assert!(config.hotel.api_key.is_none());
}

#[test]
fn unknown_field_in_memory_produces_error() {
    let toml = r#"
[memory]
min_scor = 0.5
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("min_scor"),
        "error should mention unknown field, got: {err_str}"
    );
}

#[test]
fn unknown_key_diagnostic_suggests_correction() {
    let toml = r#"
[memory]
max_reslts = 3
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey {
                key, suggestion, ..
            } => Some((key.clone(), suggestion.clone())),
            _ => None,
        })
        .expect("should contain an UnknownKey error");
    assert_eq!(unknown.0, "max_reslts");
    assert_eq!(unknown.1.as_deref(), Some("max_results"));
}

#[test]
fn wrong_type_produces_wrong_type_error() {
    let toml = r#"
[memory]
max_results = "lots"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::WrongType { key, .. } if key.contains("max_results")))
    );
}

#[test]
fn validation_errors_surface_through_load_and_validate() {
    let toml = r#"
[memory]
min_score = 2.0
max_results = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

/// Dotted overrides layered on top of TOML win, mirroring the env provider's mapping.
#[test]
fn dotted_override_wins_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[memory]
knowledge_base_id = "FROMTOML1"
"#;

    let config: TeachAssistConfig = Figment::new()
        .merge(Serialized::defaults(TeachAssistConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("memory.knowledge_base_id", "FROMENV22"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.memory.knowledge_base_id.as_deref(), Some("FROMENV22"));
}

#[test]
#[serial_test::serial]
fn load_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[agent]\nhistory_turns = 2\n\n[hotel]\nlanguage = \"fr\"").expect("write");

    let config = load_config_from_path(file.path()).expect("file should load");
    assert_eq!(config.agent.history_turns, 2);
    assert_eq!(config.hotel.language, "fr");
}

#[test]
#[serial_test::serial]
fn unprefixed_unsplash_key_fills_images_section() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    // SAFETY: serialized with every other env-touching test.
    unsafe { std::env::set_var("UNSPLASH_API_KEY", "unsplash-env-key") };
    let loaded = load_config_from_path(file.path());
    unsafe { std::env::remove_var("UNSPLASH_API_KEY") };

    let config = loaded.expect("file should load");
    assert_eq!(config.images.api_key.as_deref(), Some("unsplash-env-key"));
}

#[test]
fn config_serializes_to_json() {
    let config = TeachAssistConfig::default();
    let json = serde_json::to_value(&config).expect("serialize");
    assert_eq!(json["memory"]["max_results"], 5);
    assert_eq!(json["routing"]["llm_fallback"], true);
}
