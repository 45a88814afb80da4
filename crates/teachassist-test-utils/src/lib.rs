// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for TeachAssist.
//!
//! Provides mock adapters for deterministic tests of the router, the
//! knowledge pipeline, and the orchestrator without network access.

pub mod mock_knowledge;
pub mod mock_provider;

pub use mock_knowledge::{MockKnowledgeBase, RetrieveCall};
pub use mock_provider::MockProvider;
