// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-backed fallback answer over extracted facts.

use std::sync::Arc;

use teachassist_core::{ProviderAdapter, ProviderRequest, TeachAssistError};
use tracing::debug;

/// System prompt for answering from retrieved facts.
pub const ANSWER_SYSTEM_PROMPT: &str = "
You are a helpful knowledge assistant that provides clear, concise answers
based on information retrieved from a knowledge base.

The information from the knowledge base contains document IDs, titles,
content previews and relevance scores. Focus on the actual content and
ignore the metadata.
";

/// Build the user prompt listing the facts under the question.
pub fn summary_prompt<S: AsRef<str>>(query: &str, entries: &[S]) -> String {
    let facts = entries
        .iter()
        .map(|e| e.as_ref())
        .collect::<Vec<&str>>()
        .join("\n- ");
    format!(
        "User question: \n{query}\n\nRelevant stored facts: \n- {facts}\n\n\
         Answer succinctly based only on these facts. If unknown, say you don't have that info."
    )
}

/// Asks the model to answer a question from a list of facts.
pub struct Summarizer {
    provider: Arc<dyn ProviderAdapter>,
    model: String,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl Summarizer {
    pub fn new(provider: Arc<dyn ProviderAdapter>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// One completion; the reply text is returned as-is.
    pub async fn summarize<S: AsRef<str>>(
        &self,
        query: &str,
        entries: &[S],
    ) -> Result<String, TeachAssistError> {
        let mut request = ProviderRequest::single_turn(
            self.model.clone(),
            Some(ANSWER_SYSTEM_PROMPT),
            summary_prompt(query, entries),
            self.max_tokens,
        );
        request.temperature = self.temperature;

        let response = self.provider.complete(request).await?;
        debug!(
            facts = entries.len(),
            output_tokens = response.usage.output_tokens,
            "summarized stored facts"
        );
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teachassist_test_utils::MockProvider;

    #[test]
    fn prompt_lists_facts_as_bullets() {
        let prompt = summary_prompt("what do I like?", &["pizza", "chess"]);
        assert_eq!(
            prompt,
            "User question: \nwhat do I like?\n\nRelevant stored facts: \n- pizza\n- chess\n\n\
             Answer succinctly based only on these facts. If unknown, say you don't have that info."
        );
    }

    #[tokio::test]
    async fn returns_completion_verbatim() {
        let provider = Arc::new(MockProvider::with_responses(vec!["  You like pizza.\n"]));
        let summarizer = Summarizer::new(provider.clone(), "m", 256).with_temperature(0.3);
        let out = summarizer
            .summarize("what do I like?", &["I like pizza"])
            .await
            .unwrap();
        assert_eq!(out, "  You like pizza.\n");

        let requests = provider.requests().await;
        assert_eq!(requests[0].system_prompt.as_deref(), Some(ANSWER_SYSTEM_PROMPT));
        assert_eq!(requests[0].temperature, Some(0.3));
        assert!(requests[0].messages[0].content.contains("- I like pizza"));
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let provider = Arc::new(MockProvider::new());
        provider.add_failure("overloaded").await;
        let summarizer = Summarizer::new(provider, "m", 256);
        assert!(summarizer.summarize("q", &["fact"]).await.is_err());
    }
}
