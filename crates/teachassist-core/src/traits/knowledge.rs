// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge base adapter trait for external memory services.

use async_trait::async_trait;

use crate::error::TeachAssistError;
use crate::types::RetrievalOptions;

/// Adapter for a memory/knowledge-base service.
///
/// Both operations return the service's raw text output. Service-reported
/// failures (`status: error`, `No knowledge base ID`) and empty results
/// (`No results found`) arrive as `Ok` text; only transport failures are `Err`.
#[async_trait]
pub trait KnowledgeBaseAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter.
    fn name(&self) -> &str;

    /// Persists a normalized fact in the given knowledge base.
    async fn store(&self, kb_id: &str, content: &str) -> Result<String, TeachAssistError>;

    /// Retrieves facts relevant to `query` from the given knowledge base.
    async fn retrieve(
        &self,
        kb_id: &str,
        query: &str,
        options: RetrievalOptions,
    ) -> Result<String, TeachAssistError>;
}
