// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge-base request pipeline.
//!
//! Store path: classify, normalize, persist. Retrieve path: fetch the raw
//! result blob, interpret any service-reported status, extract facts, answer
//! directly when the question shape allows it, otherwise summarize.
//!
//! Misconfiguration, service-reported errors, empty results, and extraction
//! failures are returned as user-facing guidance text. Only transport and
//! model failures are `Err`.

use std::fmt;
use std::sync::Arc;

use teachassist_config::model::MemoryConfig;
use teachassist_core::{Action, KnowledgeBaseAdapter, TeachAssistError};
use teachassist_memory::{
    Summarizer, answer_from_memory, extract_memory_entries, normalize_store_content,
};
use teachassist_router::ActionClassifier;
use tracing::{debug, info, warn};

use crate::session::SessionContext;

pub const STORED_REPLY: &str = "I've stored this information.";

pub const NO_RESULTS_GUIDANCE: &str = "I don't have any stored information matching that yet. \
    Try phrasing a fact to store first, e.g. 'Remember that my birthday is 12 Oct'.";

pub const EXTRACTION_FAILED_GUIDANCE: &str = "I couldn't extract any relevant stored facts yet. \
    Try storing it explicitly, e.g. 'Remember that my birthday is 12 Oct'.";

/// Markers the memory service uses to report a failed request in its output.
const ERROR_MARKERS: &[&str] = &[
    "status': 'error'",
    "\"status\": \"error\"",
    "status: error",
    "No knowledge base ID",
];

const NO_RESULTS_MARKER: &str = "No results found";

const MIN_KB_ID_LEN: usize = 6;

/// A knowledge-base id: ASCII letters and digits only, at least six long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KnowledgeBaseId(String);

impl KnowledgeBaseId {
    pub fn parse(raw: &str) -> Result<Self, TeachAssistError> {
        if raw.len() >= MIN_KB_ID_LEN && raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(TeachAssistError::Config(not_configured_message(raw)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KnowledgeBaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn not_configured_message(raw: &str) -> String {
    format!(
        "Knowledge base is not configured. Provide a valid alphanumeric Knowledge Base ID \
         (no hyphens or special characters, got '{raw}')."
    )
}

/// Where the knowledge-base id for a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KbIdSource {
    Session,
    Config,
    Fallback,
}

/// Whether a raw retrieval result reports a service-side failure.
pub fn reports_error(raw: &str) -> bool {
    ERROR_MARKERS.iter().any(|m| raw.contains(m))
}

/// Store and retrieve personal facts through a [`KnowledgeBaseAdapter`].
pub struct KnowledgePipeline {
    kb: Arc<dyn KnowledgeBaseAdapter>,
    actions: ActionClassifier,
    summarizer: Summarizer,
    configured_id: Option<String>,
    fallback_id: String,
}

impl KnowledgePipeline {
    pub fn new(
        kb: Arc<dyn KnowledgeBaseAdapter>,
        actions: ActionClassifier,
        summarizer: Summarizer,
        memory: &MemoryConfig,
    ) -> Self {
        Self {
            kb,
            actions,
            summarizer,
            configured_id: memory
                .knowledge_base_id
                .clone()
                .filter(|id| !id.is_empty()),
            fallback_id: memory.fallback_knowledge_base_id.clone(),
        }
    }

    /// Session override, then configuration, then the demo fallback.
    pub fn resolve_kb_id(&self, session: &SessionContext) -> (String, KbIdSource) {
        if let Some(id) = session.kb_id.as_deref().filter(|id| !id.is_empty()) {
            return (id.to_string(), KbIdSource::Session);
        }
        if let Some(id) = &self.configured_id {
            return (id.clone(), KbIdSource::Config);
        }
        warn!(
            kb_id = %self.fallback_id,
            "no knowledge base id configured; using demo knowledge base. \
             Set memory.knowledge_base_id or STRANDS_KNOWLEDGE_BASE_ID for real data"
        );
        (self.fallback_id.clone(), KbIdSource::Fallback)
    }

    /// Handle one knowledge-base-routed query.
    pub async fn handle(
        &self,
        query: &str,
        session: &SessionContext,
    ) -> Result<String, TeachAssistError> {
        let (raw_id, source) = self.resolve_kb_id(session);
        let kb_id = match KnowledgeBaseId::parse(&raw_id) {
            Ok(id) => id,
            Err(_) => {
                warn!(kb_id = %raw_id, ?source, "invalid knowledge base id");
                return Ok(not_configured_message(&raw_id));
            }
        };

        match self.actions.classify_action(query).await? {
            Action::Store => self.store(&kb_id, query).await,
            Action::Retrieve => self.retrieve(&kb_id, query, session).await,
        }
    }

    async fn store(
        &self,
        kb_id: &KnowledgeBaseId,
        query: &str,
    ) -> Result<String, TeachAssistError> {
        let normalized = normalize_store_content(query);
        let content = if normalized.is_empty() { query } else { normalized.as_str() };

        let receipt = self.kb.store(kb_id.as_str(), content).await?;
        info!(kb_id = %kb_id, adapter = self.kb.name(), %receipt, "fact stored");
        Ok(STORED_REPLY.to_string())
    }

    async fn retrieve(
        &self,
        kb_id: &KnowledgeBaseId,
        query: &str,
        session: &SessionContext,
    ) -> Result<String, TeachAssistError> {
        let raw = self.kb.retrieve(kb_id.as_str(), query, session.options).await?;

        if reports_error(&raw) {
            warn!(kb_id = %kb_id, "memory service reported an error");
            return Ok(format!(
                "Knowledge base request failed. Please verify the ID, region, and permissions. \
                 Current ID: {kb_id}. Error: {raw}"
            ));
        }
        if raw.contains(NO_RESULTS_MARKER) {
            debug!(kb_id = %kb_id, "no stored facts matched");
            return Ok(NO_RESULTS_GUIDANCE.to_string());
        }

        let entries = extract_memory_entries(&raw);
        if let Some(answer) = answer_from_memory(query, &entries) {
            debug!(facts = entries.len(), "answered directly from stored facts");
            return Ok(answer);
        }
        if entries.is_empty() {
            return Ok(EXTRACTION_FAILED_GUIDANCE.to_string());
        }

        let summary = self.summarizer.summarize(query, &entries).await?;
        if summary.trim().is_empty() {
            return Ok(EXTRACTION_FAILED_GUIDANCE.to_string());
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn valid_ids() {
        assert_eq!(KnowledgeBaseId::parse("demokb123").unwrap().as_str(), "demokb123");
        assert!(KnowledgeBaseId::parse("ABC123").is_ok());
    }

    #[test]
    fn rejects_short_and_special_ids() {
        assert!(KnowledgeBaseId::parse("abc12").is_err());
        assert!(KnowledgeBaseId::parse("my-kb-123").is_err());
        assert!(KnowledgeBaseId::parse("kb 12345").is_err());
        assert!(KnowledgeBaseId::parse("").is_err());
        assert!(KnowledgeBaseId::parse("ünïcödé123").is_err());
    }

    #[test]
    fn invalid_id_message_names_the_id() {
        let err = KnowledgeBaseId::parse("my-kb").unwrap_err();
        assert!(err.to_string().contains("got 'my-kb'"));
    }

    #[test]
    fn error_markers() {
        assert!(reports_error("{'status': 'error', 'content': []}"));
        assert!(reports_error(r#"{"status": "error"}"#));
        assert!(reports_error("status: error, No knowledge base ID configured"));
        assert!(!reports_error("Retrieved 1 results with score >= 0.6:"));
    }

    proptest! {
        #[test]
        fn parse_accepts_exactly_long_alnum(raw in "\\PC{0,12}") {
            let valid = raw.len() >= 6 && raw.chars().all(|c| c.is_ascii_alphanumeric());
            prop_assert_eq!(KnowledgeBaseId::parse(&raw).is_ok(), valid);
        }
    }
}
