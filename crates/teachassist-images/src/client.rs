// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for Unsplash photo search.
//!
//! One request per call. Non-success statuses and undecodable bodies surface
//! as [`TeachAssistError::Lookup`].

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use teachassist_config::model::ImagesConfig;
use teachassist_core::TeachAssistError;
use tracing::debug;

const SEARCH_PATH: &str = "/search/photos";
const API_KEY_ENV: &str = "UNSPLASH_API_KEY";

/// Image URLs from a search response: `urls.full` per result, else
/// `urls.regular`. Results with neither are skipped.
pub fn photo_urls(body: &Value) -> Vec<String> {
    let Some(results) = body.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };
    results
        .iter()
        .filter_map(|item| {
            let urls = item.get("urls")?;
            ["full", "regular"]
                .iter()
                .filter_map(|k| urls.get(*k).and_then(Value::as_str))
                .find(|u| !u.is_empty())
                .map(str::to_string)
        })
        .collect()
}

/// Client for the photo search endpoint.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: String,
    per_page: u32,
}

impl UnsplashClient {
    /// Build from the `[images]` section, reading the key from config or
    /// `UNSPLASH_API_KEY`.
    pub fn from_config(config: &ImagesConfig) -> Result<Self, TeachAssistError> {
        let api_key = resolve_api_key(config.api_key.as_deref(), std::env::var(API_KEY_ENV).ok())?;
        Self::new(&api_key, config)
    }

    pub fn new(api_key: &str, config: &ImagesConfig) -> Result<Self, TeachAssistError> {
        let mut headers = HeaderMap::new();
        headers.insert("accept-version", HeaderValue::from_static("v1"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Client-ID {api_key}")).map_err(|e| {
                TeachAssistError::Config(format!("invalid image API key header value: {e}"))
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TeachAssistError::Lookup {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            per_page: config.per_page,
        })
    }

    /// Search with the configured page size.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, TeachAssistError> {
        self.search_with(query, self.per_page).await
    }

    pub async fn search_with(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<Vec<String>, TeachAssistError> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| TeachAssistError::Lookup {
                message: format!("image search request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TeachAssistError::Lookup {
                message: format!("image search returned {status}: {body}"),
                source: None,
            });
        }

        let body: Value = response.json().await.map_err(|e| TeachAssistError::Lookup {
            message: format!("failed to decode image search response: {e}"),
            source: Some(Box::new(e)),
        })?;
        let urls = photo_urls(&body);
        debug!(query, per_page, count = urls.len(), "image search complete");
        Ok(urls)
    }
}

fn resolve_api_key(
    config_key: Option<&str>,
    env_key: Option<String>,
) -> Result<String, TeachAssistError> {
    config_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| env_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()))
        .ok_or_else(|| {
            TeachAssistError::Config(
                "image API key not found. Set images.api_key in config or UNSPLASH_API_KEY environment variable.".into(),
            )
        })
}
