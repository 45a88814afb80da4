// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Adapters use `#[async_trait]` for dynamic dispatch compatibility.

pub mod knowledge;
pub mod provider;

pub use knowledge::KnowledgeBaseAdapter;
pub use provider::ProviderAdapter;
