// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-backed routing decisions.
//!
//! [`IntentRouter`] runs the keyword pre-check and falls back to a one-word
//! model call. [`ActionClassifier`] decides store vs retrieve for
//! knowledge-base queries. Model output is untrusted: it is normalized and
//! compared exactly, never parsed loosely.

use std::sync::Arc;

use teachassist_config::model::{AnthropicConfig, RoutingConfig};
use teachassist_core::{
    Action, ProviderAdapter, ProviderRequest, Route, TeachAssistError,
};
use tracing::{debug, info};

use crate::classifier::KeywordClassifier;
use crate::prompts::{ACTION_SYSTEM_PROMPT, ROUTE_SYSTEM_PROMPT, query_prompt};

/// How a route was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
    /// Keyword pre-check matched; no model call.
    Keyword(&'static str),
    /// One-word model classification.
    Model,
    /// Model fallback disabled by configuration.
    Default,
}

/// A routing decision with provenance for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingDecision {
    pub route: Route,
    pub source: RouteSource,
}

/// Settings shared by the two classification calls.
#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl ClassifierSettings {
    pub fn from_config(anthropic: &AnthropicConfig, routing: &RoutingConfig) -> Self {
        Self {
            model: anthropic.default_model.clone(),
            max_tokens: routing.classifier_max_tokens,
            temperature: Some(anthropic.temperature),
        }
    }

    fn request(&self, system_prompt: &str, utterance: &str) -> ProviderRequest {
        let mut request = ProviderRequest::single_turn(
            self.model.clone(),
            Some(system_prompt),
            query_prompt(utterance),
            self.max_tokens,
        );
        request.temperature = self.temperature;
        request
    }
}

/// Strip whitespace, surrounding quotes, and punctuation, then lower-case.
pub fn normalize_model_word(output: &str) -> String {
    output
        .trim_matches(|c: char| {
            c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '\u{201c}' | '\u{201d}')
        })
        .to_lowercase()
}

/// Teacher vs knowledge-base router.
pub struct IntentRouter {
    provider: Arc<dyn ProviderAdapter>,
    keywords: KeywordClassifier,
    settings: ClassifierSettings,
    llm_fallback: bool,
}

impl IntentRouter {
    pub fn new(provider: Arc<dyn ProviderAdapter>, settings: ClassifierSettings) -> Self {
        Self {
            provider,
            keywords: KeywordClassifier::new(),
            settings,
            llm_fallback: true,
        }
    }

    /// Disable the model call for utterances the keyword check does not decide.
    pub fn with_llm_fallback(mut self, enabled: bool) -> Self {
        self.llm_fallback = enabled;
        self
    }

    /// Route an utterance.
    ///
    /// A keyword hit returns `Knowledgebase` without touching the provider.
    /// Otherwise exactly one completion is made; only the word
    /// `knowledgebase` selects the knowledge base, anything else is `Teacher`.
    pub async fn classify_intent(&self, utterance: &str) -> Result<Route, TeachAssistError> {
        Ok(self.decide(utterance).await?.route)
    }

    /// Like [`classify_intent`](Self::classify_intent) but reports how the route was reached.
    pub async fn decide(&self, utterance: &str) -> Result<RoutingDecision, TeachAssistError> {
        let pre = self.keywords.classify(utterance);
        if let (Some(route), Some(keyword)) = (pre.route, pre.matched_keyword) {
            debug!(keyword, "keyword pre-check matched");
            return Ok(RoutingDecision {
                route,
                source: RouteSource::Keyword(keyword),
            });
        }

        if !self.llm_fallback {
            return Ok(RoutingDecision {
                route: Route::Teacher,
                source: RouteSource::Default,
            });
        }

        let response = self
            .provider
            .complete(self.settings.request(ROUTE_SYSTEM_PROMPT, utterance))
            .await
            .map_err(|e| TeachAssistError::classification("intent classification call failed", e))?;

        let word = normalize_model_word(&response.content);
        let route = if word == "knowledgebase" {
            Route::Knowledgebase
        } else {
            Route::Teacher
        };
        info!(model_output = %word, route = %route, "intent classified by model");

        Ok(RoutingDecision {
            route,
            source: RouteSource::Model,
        })
    }
}

/// Store vs retrieve classifier for knowledge-base queries.
pub struct ActionClassifier {
    provider: Arc<dyn ProviderAdapter>,
    settings: ClassifierSettings,
}

impl ActionClassifier {
    pub fn new(provider: Arc<dyn ProviderAdapter>, settings: ClassifierSettings) -> Self {
        Self { provider, settings }
    }

    /// One completion; exactly `store` selects [`Action::Store`], anything else retrieves.
    pub async fn classify_action(&self, utterance: &str) -> Result<Action, TeachAssistError> {
        let response = self
            .provider
            .complete(self.settings.request(ACTION_SYSTEM_PROMPT, utterance))
            .await
            .map_err(|e| TeachAssistError::classification("action classification call failed", e))?;

        let word = normalize_model_word(&response.content);
        let action = if word == "store" {
            Action::Store
        } else {
            Action::Retrieve
        };
        debug!(model_output = %word, action = %action, "action classified");
        Ok(action)
    }
}
