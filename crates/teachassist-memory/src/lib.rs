// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Personal-fact handling for TeachAssist.
//!
//! Turns "remember that ..." utterances into storable facts, pulls facts back
//! out of raw memory-service output, answers birthday/residence/name questions
//! directly, and falls back to a model summary otherwise.

pub mod answer;
pub mod local;
pub mod normalize;
pub mod parser;
pub mod summarize;

pub use answer::{QuestionKind, answer_from_memory};
pub use local::LocalKnowledgeBase;
pub use normalize::normalize_store_content;
pub use parser::extract_memory_entries;
pub use summarize::{ANSWER_SYSTEM_PROMPT, Summarizer};
