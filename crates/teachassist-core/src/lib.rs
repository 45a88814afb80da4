// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for TeachAssist.
//!
//! This crate provides the adapter traits, error type, and shared types
//! (routes, actions, provider requests) used throughout the workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TeachAssistError;
pub use traits::{KnowledgeBaseAdapter, ProviderAdapter};
pub use types::{
    Action, ProviderMessage, ProviderRequest, ProviderResponse, RetrievalOptions, Route,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn error_variants_render() {
        let config = TeachAssistError::Config("missing key".into());
        assert_eq!(config.to_string(), "configuration error: missing key");

        let provider = TeachAssistError::Provider {
            message: "API returned 500".into(),
            source: None,
        };
        assert_eq!(provider.to_string(), "provider error: API returned 500");

        let kb = TeachAssistError::KnowledgeBase {
            message: "connection refused".into(),
            source: None,
        };
        assert!(kb.to_string().contains("connection refused"));
    }

    #[test]
    fn classification_wraps_source() {
        let err = TeachAssistError::classification(
            "intent fallback failed",
            TeachAssistError::Internal("boom".into()),
        );
        assert_eq!(err.to_string(), "classification failed: intent fallback failed");
        let source = std::error::Error::source(&err).expect("source should be kept");
        assert!(source.to_string().contains("boom"));
    }

    #[test]
    fn route_string_forms() {
        assert_eq!(Route::Teacher.to_string(), "teacher");
        assert_eq!(Route::Knowledgebase.to_string(), "knowledgebase");
        assert_eq!(Route::from_str("KnowledgeBase").unwrap(), Route::Knowledgebase);
        assert!(Route::from_str("kb").is_err());
    }

    #[test]
    fn action_string_forms() {
        assert_eq!(Action::Store.to_string(), "store");
        assert_eq!(Action::from_str("Retrieve").unwrap(), Action::Retrieve);
        let json = serde_json::to_string(&Action::Store).unwrap();
        assert_eq!(json, "\"store\"");
    }

    #[test]
    fn retrieval_options_defaults() {
        let options = RetrievalOptions::default();
        assert_eq!(options.min_score, 0.6);
        assert_eq!(options.max_results, 5);
    }

    #[test]
    fn single_turn_request_shape() {
        let req = ProviderRequest::single_turn("model-a", Some("be brief"), "Query: hi", 16);
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[0].content, "Query: hi");
        assert_eq!(req.system_prompt.as_deref(), Some("be brief"));
    }
}
