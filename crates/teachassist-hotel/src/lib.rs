// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hotel search and availability lookups against the Airtrotter API.
//!
//! Responses are treated as untyped JSON and decoded through fixed key
//! priority lists in [`decode`].

pub mod client;
pub mod decode;
pub mod filter;
pub mod matching;

pub use client::{AirtrotterClient, AvailabilityReport, BestMatchReport, StayParams};
pub use decode::{HotelCandidate, flatten_candidates};
pub use filter::AvailabilityFilter;
pub use matching::{normalize_name, score_name_match, select_best_match};
