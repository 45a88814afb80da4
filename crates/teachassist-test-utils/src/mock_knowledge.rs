// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock memory service for pipeline tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use teachassist_core::traits::KnowledgeBaseAdapter;
use teachassist_core::types::RetrievalOptions;
use teachassist_core::TeachAssistError;

/// A recorded `retrieve` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveCall {
    pub kb_id: String,
    pub query: String,
    pub options: RetrievalOptions,
}

/// A memory service returning scripted raw text for `retrieve`.
///
/// `store` always succeeds and records `(kb_id, content)`. `retrieve`
/// pops from a FIFO queue and falls back to `No results found.`.
pub struct MockKnowledgeBase {
    retrievals: Arc<Mutex<VecDeque<Result<String, String>>>>,
    stored: Arc<Mutex<Vec<(String, String)>>>,
    retrieve_calls: Arc<Mutex<Vec<RetrieveCall>>>,
}

impl MockKnowledgeBase {
    pub fn new() -> Self {
        Self {
            retrievals: Arc::new(Mutex::new(VecDeque::new())),
            stored: Arc::new(Mutex::new(Vec::new())),
            retrieve_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-load raw retrieval outputs.
    pub fn with_retrievals<S: Into<String>>(outputs: Vec<S>) -> Self {
        let kb = Self::new();
        if let Ok(mut queue) = kb.retrievals.try_lock() {
            queue.extend(outputs.into_iter().map(|o| Ok(o.into())));
        }
        kb
    }

    pub async fn add_retrieval(&self, raw: impl Into<String>) {
        self.retrievals.lock().await.push_back(Ok(raw.into()));
    }

    /// Queue a transport failure for the next `retrieve`.
    pub async fn add_transport_failure(&self, message: impl Into<String>) {
        self.retrievals.lock().await.push_back(Err(message.into()));
    }

    /// `(kb_id, content)` pairs passed to `store`, oldest first.
    pub async fn stored(&self) -> Vec<(String, String)> {
        self.stored.lock().await.clone()
    }

    pub async fn retrieve_calls(&self) -> Vec<RetrieveCall> {
        self.retrieve_calls.lock().await.clone()
    }
}

impl Default for MockKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeBaseAdapter for MockKnowledgeBase {
    fn name(&self) -> &str {
        "mock-knowledge-base"
    }

    async fn store(&self, kb_id: &str, content: &str) -> Result<String, TeachAssistError> {
        let mut stored = self.stored.lock().await;
        stored.push((kb_id.to_string(), content.to_string()));
        Ok(format!("Stored document mem_{}", stored.len()))
    }

    async fn retrieve(
        &self,
        kb_id: &str,
        query: &str,
        options: RetrievalOptions,
    ) -> Result<String, TeachAssistError> {
        self.retrieve_calls.lock().await.push(RetrieveCall {
            kb_id: kb_id.to_string(),
            query: query.to_string(),
            options,
        });
        match self.retrievals.lock().await.pop_front() {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(message)) => Err(TeachAssistError::KnowledgeBase {
                message,
                source: None,
            }),
            None => Ok("No results found.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_stores_and_retrievals() {
        let kb = MockKnowledgeBase::with_retrievals(vec!["Content Preview: fact"]);
        kb.store("kb123456", "my name is Ada").await.unwrap();

        let raw = kb
            .retrieve("kb123456", "my name", RetrievalOptions::default())
            .await
            .unwrap();
        assert_eq!(raw, "Content Preview: fact");
        assert_eq!(kb.stored().await, vec![("kb123456".to_string(), "my name is Ada".to_string())]);
        assert_eq!(kb.retrieve_calls().await[0].options.max_results, 5);
    }

    #[tokio::test]
    async fn empty_queue_means_no_results() {
        let kb = MockKnowledgeBase::new();
        let raw = kb
            .retrieve("kb123456", "anything", RetrievalOptions::default())
            .await
            .unwrap();
        assert_eq!(raw, "No results found.");
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let kb = MockKnowledgeBase::new();
        kb.add_transport_failure("connection reset").await;
        let err = kb
            .retrieve("kb123456", "q", RetrievalOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TeachAssistError::KnowledgeBase { .. }));
    }
}
