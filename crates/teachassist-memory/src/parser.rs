// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction of stored facts from raw memory-service output.
//!
//! The service returns semi-structured text. Each hit carries a line such as
//!
//! ```text
//! Content Preview: {"content": "my birthday is 12 oktober", "source": "chat"}
//! ```
//!
//! and only the fact itself is of interest.

const PREVIEW_MARKER: &str = "Content Preview:";
const CONTENT_KEY: &str = "\"content\":";

/// Extract fact strings from a raw retrieval result, in line order.
///
/// Lines without a `Content Preview:` marker are ignored. JSON-ish previews
/// yield the value of their `"content"` field; anything else yields the
/// trimmed preview text. Duplicates are kept.
pub fn extract_memory_entries(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            let (_, snippet) = line.split_once(PREVIEW_MARKER)?;
            let snippet = snippet.trim();

            if let Some(value) = content_field(snippet) {
                return Some(unescape(value).trim().to_string());
            }
            (!snippet.is_empty()).then(|| snippet.to_string())
        })
        .collect()
}

/// Value of the first `"content":` field, up to the next unescaped quote.
///
/// Returns `None` when the key is absent or the value is unterminated.
fn content_field(snippet: &str) -> Option<&str> {
    let (_, after) = snippet.split_once(CONTENT_KEY)?;
    let after = after.trim_start();
    let value = after.strip_prefix('"').unwrap_or(after);

    let mut escaped = false;
    for (i, c) in value.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(&value[..i]),
            _ => escaped = false,
        }
    }
    None
}

/// Decode JSON string escapes in a captured value, or keep it as-is when it
/// is not a valid JSON string body.
fn unescape(value: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{value}\"")).unwrap_or_else(|_| value.to_string())
}
