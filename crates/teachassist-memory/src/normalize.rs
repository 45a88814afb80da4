// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strips imperative "remember that ..." prefixes before a fact is stored.

/// Command prefixes, most specific first. Matched case-insensitively.
const STORE_PREFIXES: &[&str] = &[
    "remember that ",
    "remember ",
    "save that ",
    "save ",
    "store that ",
    "store ",
    "note that ",
    "record that ",
];

/// Normalize a store utterance into the fact that should be persisted.
///
/// The input is trimmed, then the first matching prefix is removed from the
/// original text (so casing of the remainder is kept) and the rest trimmed.
/// Returns an empty string only for empty or whitespace-only input.
pub fn normalize_store_content(raw: &str) -> String {
    let text = raw.trim();

    for prefix in STORE_PREFIXES {
        let Some(head) = text.get(..prefix.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(prefix) {
            return text[prefix.len()..].trim().to_string();
        }
    }

    text.to_string()
}
