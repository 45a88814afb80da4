// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./teachassist.toml` > `~/.config/teachassist/teachassist.toml`
//! > `/etc/teachassist/teachassist.toml` with environment variable overrides via the
//! `TEACHASSIST_` prefix. A few well-known unprefixed variables are honored as well.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TeachAssistConfig;

/// System-wide config path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/teachassist/teachassist.toml";

/// Local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "teachassist.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/teachassist/teachassist.toml` (system-wide)
/// 3. `~/.config/teachassist/teachassist.toml` (user XDG config)
/// 4. `./teachassist.toml` (local directory)
/// 5. Unprefixed well-known variables (`STRANDS_KNOWLEDGE_BASE_ID`, `AIRTROTTER_API_KEY`,
///    `UNSPLASH_API_KEY`)
/// 6. `TEACHASSIST_*` environment variables
pub fn load_config() -> Result<TeachAssistConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TeachAssistConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TeachAssistConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TeachAssistConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TeachAssistConfig::default()))
        .merge(Toml::file(path))
        .merge(legacy_env_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TeachAssistConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(legacy_env_provider())
        .merge(env_provider())
}

/// Path of the per-user config file, if a config dir exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("teachassist").join(LOCAL_CONFIG_FILE))
}

/// Unprefixed variables kept for compatibility with existing deployments.
fn legacy_env_provider() -> Env {
    Env::raw()
        .only(&[
            "STRANDS_KNOWLEDGE_BASE_ID",
            "AIRTROTTER_API_KEY",
            "UNSPLASH_API_KEY",
        ])
        .map(|key| {
            if key.as_str().eq_ignore_ascii_case("STRANDS_KNOWLEDGE_BASE_ID") {
                "memory.knowledge_base_id".into()
            } else if key.as_str().eq_ignore_ascii_case("AIRTROTTER_API_KEY") {
                "hotel.api_key".into()
            } else if key.as_str().eq_ignore_ascii_case("UNSPLASH_API_KEY") {
                "images.api_key".into()
            } else {
                key.as_str().to_string().into()
            }
        })
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that underscore-containing
/// key names survive. `TEACHASSIST_MEMORY_KNOWLEDGE_BASE_ID` must map to
/// `memory.knowledge_base_id`, not `memory.knowledge.base.id`.
fn env_provider() -> Env {
    Env::prefixed("TEACHASSIST_").map(|key| map_env_key(&key.as_str().to_ascii_lowercase()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    const SECTIONS: [&str; 6] = ["agent", "anthropic", "routing", "memory", "hotel", "images"];
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section) {
            if let Some(field) = rest.strip_prefix('_') {
                return format!("{section}.{field}");
            }
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_first_underscore_only() {
        assert_eq!(
            map_env_key("memory_knowledge_base_id"),
            "memory.knowledge_base_id"
        );
        assert_eq!(map_env_key("hotel_api_key"), "hotel.api_key");
        assert_eq!(map_env_key("images_per_page"), "images.per_page");
        assert_eq!(
            map_env_key("routing_classifier_max_tokens"),
            "routing.classifier_max_tokens"
        );
    }

    #[test]
    fn unknown_section_is_left_alone() {
        assert_eq!(map_env_key("telegram_bot_token"), "telegram_bot_token");
        assert_eq!(map_env_key("agentx"), "agentx");
    }
}
