// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process memory service.
//!
//! Implements the memory-service contract without a remote backend: facts are
//! kept per knowledge base in insertion order and scored against a query by
//! token overlap. Output mirrors the remote service's text format so the
//! retrieval parser handles both identically.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use async_trait::async_trait;
use teachassist_core::{KnowledgeBaseAdapter, RetrievalOptions, TeachAssistError};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Returned for an empty knowledge base identifier.
pub const MISSING_ID_RESPONSE: &str = "status: error, No knowledge base ID configured";

/// Returned when nothing reaches the score threshold.
pub const NO_RESULTS_RESPONSE: &str = "No results found.";

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "am", "are", "at", "be", "do", "does", "for", "i", "in", "is", "it",
    "me", "my", "of", "on", "or", "that", "the", "to", "was", "what", "when", "where", "who",
    "you", "your",
];

#[derive(Debug, Clone)]
struct Document {
    id: String,
    content: String,
    tokens: HashSet<String>,
}

#[derive(Debug, Default)]
struct Collection {
    documents: Vec<Document>,
    next_id: u64,
}

/// Lower-cased alphanumeric tokens with stop words removed.
fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

/// Fraction of query tokens present in the document.
///
/// A query made only of stop words ("who am I") matches every fact fully.
fn overlap_score(query: &HashSet<String>, document: &HashSet<String>) -> f64 {
    if query.is_empty() {
        return 1.0;
    }
    query.intersection(document).count() as f64 / query.len() as f64
}

/// Memory service kept in process memory, keyed by knowledge base id.
#[derive(Debug, Default)]
pub struct LocalKnowledgeBase {
    collections: RwLock<HashMap<String, Collection>>,
}

impl LocalKnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of facts stored under `kb_id`.
    pub async fn len(&self, kb_id: &str) -> usize {
        self.collections
            .read()
            .await
            .get(kb_id)
            .map_or(0, |c| c.documents.len())
    }
}

#[async_trait]
impl KnowledgeBaseAdapter for LocalKnowledgeBase {
    fn name(&self) -> &str {
        "local"
    }

    async fn store(&self, kb_id: &str, content: &str) -> Result<String, TeachAssistError> {
        if kb_id.trim().is_empty() {
            return Ok(MISSING_ID_RESPONSE.to_string());
        }

        let mut collections = self.collections.write().await;
        let collection = collections.entry(kb_id.to_string()).or_default();
        collection.next_id += 1;
        let id = format!("mem_{}", collection.next_id);
        collection.documents.push(Document {
            id: id.clone(),
            content: content.to_string(),
            tokens: tokenize(content),
        });

        info!(kb_id, document_id = %id, "stored fact");
        Ok(format!("Successfully stored content in knowledge base. Document ID: {id}"))
    }

    async fn retrieve(
        &self,
        kb_id: &str,
        query: &str,
        options: RetrievalOptions,
    ) -> Result<String, TeachAssistError> {
        if kb_id.trim().is_empty() {
            return Ok(MISSING_ID_RESPONSE.to_string());
        }

        let query_tokens = tokenize(query);
        let collections = self.collections.read().await;
        let Some(collection) = collections.get(kb_id) else {
            return Ok(NO_RESULTS_RESPONSE.to_string());
        };

        let mut hits: Vec<(f64, &Document)> = collection
            .documents
            .iter()
            .map(|doc| (overlap_score(&query_tokens, &doc.tokens), doc))
            .filter(|(score, _)| *score > 0.0 && *score >= options.min_score)
            .collect();
        // Stable sort keeps insertion order among equal scores.
        hits.sort_by(|a, b| b.0.total_cmp(&a.0));
        hits.truncate(options.max_results);

        debug!(kb_id, hits = hits.len(), min_score = options.min_score, "retrieved facts");

        if hits.is_empty() {
            return Ok(NO_RESULTS_RESPONSE.to_string());
        }

        let mut out = format!(
            "Retrieved {} results with score >= {}:\n",
            hits.len(),
            options.min_score
        );
        for (score, doc) in hits {
            let content = serde_json::to_string(&doc.content).map_err(|e| {
                TeachAssistError::KnowledgeBase {
                    message: format!("failed to encode document {}: {e}", doc.id),
                    source: Some(Box::new(e)),
                }
            })?;
            let _ = write!(
                out,
                "\nScore: {score:.4}\nDocument ID: {}\nContent Preview: {{\"content\": {content}}}\n",
                doc.id
            );
        }
        Ok(out)
    }
}
