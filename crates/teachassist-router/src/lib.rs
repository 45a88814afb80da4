// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent routing for TeachAssist.
//!
//! This crate provides:
//! - [`KeywordClassifier`]: zero-cost keyword pre-check for memory queries
//! - [`IntentRouter`]: teacher vs knowledge-base routing with a model fallback
//! - [`ActionClassifier`]: store vs retrieve for knowledge-base queries

pub mod classifier;
pub mod prompts;
pub mod router;

pub use classifier::{ClassificationResult, KeywordClassifier};
pub use router::{
    ActionClassifier, ClassifierSettings, IntentRouter, RouteSource, RoutingDecision,
    normalize_model_word,
};
