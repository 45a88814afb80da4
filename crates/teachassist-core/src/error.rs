// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for TeachAssist.

use thiserror::Error;

/// The primary error type used across all TeachAssist adapters and pipelines.
#[derive(Debug, Error)]
pub enum TeachAssistError {
    /// Configuration errors (missing API key, invalid header values, bad settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider errors (API failure, malformed response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Routing or store/retrieve classification could not be completed.
    #[error("classification failed: {message}")]
    Classification {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Memory service transport errors.
    ///
    /// Errors the service reports inside its response text are not raised
    /// through this variant; those are interpreted by the knowledge pipeline.
    #[error("knowledge base error: {message}")]
    KnowledgeBase {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// External lookup API errors (hotels, images).
    #[error("lookup error: {message}")]
    Lookup {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TeachAssistError {
    /// Wraps any error raised while classifying a query.
    pub fn classification(message: impl Into<String>, source: TeachAssistError) -> Self {
        TeachAssistError::Classification {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
