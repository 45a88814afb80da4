// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Photo search against the Unsplash API.

pub mod client;

pub use client::{UnsplashClient, photo_urls};
