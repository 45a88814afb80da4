// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-conversation state, owned by the caller.

use teachassist_config::model::MemoryConfig;
use teachassist_core::{ProviderMessage, RetrievalOptions};

/// Conversation history plus knowledge-base settings for one session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// All turns so far, oldest first.
    pub history: Vec<ProviderMessage>,
    /// Knowledge-base id override for this session only.
    pub kb_id: Option<String>,
    pub options: RetrievalOptions,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded with the configured retrieval options.
    pub fn from_config(memory: &MemoryConfig) -> Self {
        Self {
            options: RetrievalOptions {
                min_score: memory.min_score,
                max_results: memory.max_results,
            },
            ..Self::default()
        }
    }

    pub fn with_kb_id(mut self, kb_id: impl Into<String>) -> Self {
        self.kb_id = Some(kb_id.into());
        self
    }

    /// Override the knowledge-base id; an empty id clears the override.
    pub fn set_kb_id(&mut self, kb_id: &str) {
        let kb_id = kb_id.trim();
        self.kb_id = (!kb_id.is_empty()).then(|| kb_id.to_string());
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.history.push(ProviderMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.history.push(ProviderMessage::assistant(content));
    }
}
