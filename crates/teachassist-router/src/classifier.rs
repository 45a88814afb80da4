// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword heuristic for memory-related queries.
//!
//! Zero-cost pre-check run before any model call: an utterance that mentions
//! storing or recalling personal facts goes straight to the knowledge base.

use teachassist_core::Route;

/// Memory keywords (contains, case-insensitive).
pub(crate) const KNOWLEDGEBASE_KEYWORDS: &[&str] = &[
    "remember",
    "store",
    "save",
    "record",
    "note that",
    "what did i tell",
    "what do you remember",
    "recall",
    "retrieve",
    "my name is",
    "i live",
    "my birthday",
    "where do i live",
    "who am i",
];

/// Result of the keyword pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    /// `Some(Route::Knowledgebase)` on a keyword hit, `None` when undecided.
    pub route: Option<Route>,
    /// The first keyword that matched.
    pub matched_keyword: Option<&'static str>,
}

impl ClassificationResult {
    /// True when the heuristic reached a decision without a model call.
    pub fn is_decided(&self) -> bool {
        self.route.is_some()
    }
}

/// Keyword classifier. Pure: no I/O, no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Check an utterance against the memory keyword list.
    pub fn classify(&self, utterance: &str) -> ClassificationResult {
        let lower = utterance.to_lowercase();
        match KNOWLEDGEBASE_KEYWORDS.iter().find(|k| lower.contains(*k)) {
            Some(keyword) => ClassificationResult {
                route: Some(Route::Knowledgebase),
                matched_keyword: Some(*keyword),
            },
            None => ClassificationResult {
                route: None,
                matched_keyword: None,
            },
        }
    }
}
