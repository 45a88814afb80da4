// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request handling for TeachAssist.
//!
//! [`Orchestrator`] routes each utterance to the [`TeacherAgent`] or the
//! [`KnowledgePipeline`]. Conversation state lives in a caller-owned
//! [`SessionContext`].

pub mod knowledge;
pub mod orchestrator;
pub mod session;
pub mod teacher;

pub use knowledge::{KbIdSource, KnowledgeBaseId, KnowledgePipeline};
pub use orchestrator::Orchestrator;
pub use session::SessionContext;
pub use teacher::{Subject, TeacherAgent};
