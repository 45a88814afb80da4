// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::TeachAssistConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

const MAX_IMAGES_PER_PAGE: u32 = 30;

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure rather than stopping at the first one.
pub fn validate_config(config: &TeachAssistConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if !LOG_LEVELS.contains(&config.agent.log_level.to_ascii_lowercase().as_str()) {
        fail(format!(
            "agent.log_level must be one of {}, got `{}`",
            LOG_LEVELS.join(", "),
            config.agent.log_level
        ));
    }

    if config.anthropic.default_model.trim().is_empty() {
        fail("anthropic.default_model must not be empty".to_string());
    }

    if config.anthropic.max_tokens == 0 {
        fail("anthropic.max_tokens must be at least 1".to_string());
    }

    if !(0.0..=1.0).contains(&config.anthropic.temperature) {
        fail(format!(
            "anthropic.temperature must be between 0.0 and 1.0, got {}",
            config.anthropic.temperature
        ));
    }

    if config.routing.classifier_max_tokens == 0 {
        fail("routing.classifier_max_tokens must be at least 1".to_string());
    }

    if !(0.0..=1.0).contains(&config.memory.min_score) {
        fail(format!(
            "memory.min_score must be between 0.0 and 1.0, got {}",
            config.memory.min_score
        ));
    }

    if config.memory.max_results == 0 {
        fail("memory.max_results must be at least 1".to_string());
    }

    if config.memory.fallback_knowledge_base_id.trim().is_empty() {
        fail("memory.fallback_knowledge_base_id must not be empty".to_string());
    }

    if !is_http_url(&config.hotel.base_url) {
        fail(format!(
            "hotel.base_url must be an http(s) URL, got `{}`",
            config.hotel.base_url
        ));
    }

    if config.hotel.rows == 0 {
        fail("hotel.rows must be at least 1".to_string());
    }

    if !is_http_url(&config.images.base_url) {
        fail(format!(
            "images.base_url must be an http(s) URL, got `{}`",
            config.images.base_url
        ));
    }

    if !(1..=MAX_IMAGES_PER_PAGE).contains(&config.images.per_page) {
        fail(format!(
            "images.per_page must be between 1 and {MAX_IMAGES_PER_PAGE}, got {}",
            config.images.per_page
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
