// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for TeachAssist.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level TeachAssist configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TeachAssistConfig {
    /// Assistant identity and session behavior.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Anthropic API settings.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Intent routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Knowledge base (memory service) settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Hotel lookup API settings.
    #[serde(default)]
    pub hotel: HotelConfig,

    /// Image search API settings.
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Assistant identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used by the interactive shell.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of prior conversation turns sent with teacher-path requests.
    #[serde(default = "default_history_turns")]
    pub history_turns: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            history_turns: default_history_turns(),
        }
    }
}

fn default_agent_name() -> String {
    "TeachAssist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_history_turns() -> usize {
    6
}

/// Anthropic API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// Anthropic API key. `None` requires the `ANTHROPIC_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for every completion.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Maximum tokens to generate for answers and summaries.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Anthropic API version string.
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            api_version: default_api_version(),
        }
    }
}

fn default_model() -> String {
    "claude-3-5-sonnet-20240620".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.3
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

/// Intent routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Ask the model when no memory keyword matches. When false, unmatched
    /// queries go straight to the teacher path.
    #[serde(default = "default_llm_fallback")]
    pub llm_fallback: bool,

    /// Max tokens for the one-word classification calls.
    #[serde(default = "default_classifier_max_tokens")]
    pub classifier_max_tokens: u32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            llm_fallback: default_llm_fallback(),
            classifier_max_tokens: default_classifier_max_tokens(),
        }
    }
}

fn default_llm_fallback() -> bool {
    true
}

fn default_classifier_max_tokens() -> u32 {
    10
}

/// Knowledge base configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Knowledge base identifier. Also read from `STRANDS_KNOWLEDGE_BASE_ID`.
    #[serde(default)]
    pub knowledge_base_id: Option<String>,

    /// Identifier used when nothing else is configured.
    #[serde(default = "default_fallback_knowledge_base_id")]
    pub fallback_knowledge_base_id: String,

    /// Minimum relevance score for retrieved facts.
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Maximum number of retrieved facts.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            knowledge_base_id: None,
            fallback_knowledge_base_id: default_fallback_knowledge_base_id(),
            min_score: default_min_score(),
            max_results: default_max_results(),
        }
    }
}

fn default_fallback_knowledge_base_id() -> String {
    "demokb123".to_string()
}

fn default_min_score() -> f64 {
    0.6
}

fn default_max_results() -> usize {
    5
}

/// Hotel lookup (Airtrotter) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HotelConfig {
    /// Client access key. Also read from `AIRTROTTER_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// REST base URL.
    #[serde(default = "default_hotel_base_url")]
    pub base_url: String,

    /// Response language code.
    #[serde(default = "default_hotel_language")]
    pub language: String,

    /// Rows requested from the availability endpoint.
    #[serde(default = "default_hotel_rows")]
    pub rows: u32,

    /// HTTP timeout in seconds.
    #[serde(default = "default_hotel_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_hotel_base_url(),
            language: default_hotel_language(),
            rows: default_hotel_rows(),
            timeout_secs: default_hotel_timeout_secs(),
        }
    }
}

fn default_hotel_base_url() -> String {
    "https://airtrotterapi.com/rest".to_string()
}

fn default_hotel_language() -> String {
    "en".to_string()
}

fn default_hotel_rows() -> u32 {
    200
}

fn default_hotel_timeout_secs() -> u64 {
    30
}

/// Image search (Unsplash) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImagesConfig {
    /// Access key sent as `Client-ID`. Also read from `UNSPLASH_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_images_base_url")]
    pub base_url: String,

    /// Photos requested per search (the API caps this at 30).
    #[serde(default = "default_images_per_page")]
    pub per_page: u32,

    #[serde(default = "default_images_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_images_base_url(),
            per_page: default_images_per_page(),
            timeout_secs: default_images_timeout_secs(),
        }
    }
}

fn default_images_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_images_per_page() -> u32 {
    10
}

fn default_images_timeout_secs() -> u64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = TeachAssistConfig::default();
        assert_eq!(config.agent.history_turns, 6);
        assert_eq!(config.memory.min_score, 0.6);
        assert_eq!(config.memory.max_results, 5);
        assert_eq!(config.memory.fallback_knowledge_base_id, "demokb123");
        assert!(config.routing.llm_fallback);
        assert_eq!(config.hotel.rows, 200);
        assert_eq!(config.images.per_page, 10);
        assert_eq!(config.images.timeout_secs, 20);
        assert_eq!(config.anthropic.temperature, 0.3);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let config = TeachAssistConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: TeachAssistConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.hotel.base_url, config.hotel.base_url);
        assert_eq!(parsed.agent.name, config.agent.name);
    }
}
