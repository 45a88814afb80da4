// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config load failures as miette diagnostics.
//!
//! Unknown keys point at the offending line of the file they came from and
//! carry a "did you mean" hint when a valid key is close enough.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use figment::error::Kind;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler similarity a valid key needs before it is offered as a fix.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A TOML file that took part in loading, kept for span lookup.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub path: String,
    pub content: String,
}

impl ConfigSource {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(code(teachassist::config::unknown_key), help("{}", unknown_key_help(suggestion.as_deref(), valid_keys)))]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        valid_keys: Vec<String>,
        #[label("not a recognized key here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` has the wrong type: found {found}")]
    #[diagnostic(code(teachassist::config::wrong_type), help("expected {expected}"))]
    WrongType {
        key: String,
        found: String,
        expected: String,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(code(teachassist::config::missing_key), help("add `{key} = <value>` to teachassist.toml"))]
    MissingKey { key: String },

    /// A value that parsed but is out of range or malformed.
    #[error("validation error: {message}")]
    #[diagnostic(code(teachassist::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(teachassist::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &[String]) -> String {
    let valid = valid_keys.join(", ");
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid}"),
        None => format!("valid keys: {valid}"),
    }
}

impl ConfigError {
    fn from_figment(error: &figment::Error, sources: &[ConfigSource]) -> Self {
        match &error.kind {
            Kind::UnknownField(field, expected) => {
                let (span, src) = locate(error, field, sources)
                    .map_or((None, None), |(span, src)| (Some(span), Some(src)));
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion: suggest_key(field, expected),
                    valid_keys: expected.iter().map(|k| k.to_string()).collect(),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.to_string(),
            },
            Kind::InvalidType(found, expected) => ConfigError::WrongType {
                key: error.path.join("."),
                found: found.to_string(),
                expected: expected.clone(),
            },
            _ => ConfigError::Other(error.to_string()),
        }
    }
}

/// One diagnostic per underlying figment error.
pub fn figment_to_config_errors(err: figment::Error, sources: &[ConfigSource]) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| ConfigError::from_figment(&e, sources))
        .collect()
}

/// Span of `field` inside the source the error came from.
///
/// Errors from an inline string carry no path; those resolve against the
/// sole source when exactly one was supplied.
fn locate(
    error: &figment::Error,
    field: &str,
    sources: &[ConfigSource],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let origin = error.metadata.as_ref().and_then(|m| m.source.as_ref());
    let source = match origin {
        Some(figment::Source::File(path)) => {
            let path = path.display().to_string();
            sources.iter().find(|s| s.path == path)
        }
        _ if sources.len() == 1 => sources.first(),
        _ => None,
    }?;

    let section: Vec<String> = error.path.iter().map(|s| s.to_string()).collect();
    let offset = find_key_offset(&source.content, &section, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(&source.path, source.content.clone()),
    ))
}

/// Byte offset of `field` as a key (followed by `=` or whitespace),
/// searching after the `[section]` header named by the first path element.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let is_key = line[indent..]
            .strip_prefix(field)
            .is_some_and(|rest| rest.starts_with([' ', '\t', '=']));
        if is_key {
            return Some(offset + indent);
        }
        offset += line.len();
    }
    None
}

/// Closest valid key above the similarity threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Print every error to stderr with miette's graphical report handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut out = String::new();
        match handler.render_report(&mut out, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{out}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_memory_key() {
        let valid = &["knowledge_base_id", "min_score", "max_results"];
        assert_eq!(suggest_key("min_scor", valid), Some("min_score".to_string()));
        assert_eq!(
            suggest_key("knowledge_bse_id", valid),
            Some("knowledge_base_id".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["name", "log_level", "history_turns"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn find_key_offset_in_section() {
        let content = "[agent]\nname = \"x\"\n\n[memory]\nmin_scor = 0.5\n";
        let path = vec!["memory".to_string()];
        let o = find_key_offset(content, &path, "min_scor").unwrap();
        assert_eq!(&content[o..o + 8], "min_scor");
    }

    #[test]
    fn find_key_offset_requires_separator() {
        let content = "[hotel]\nlanguage_code = \"en\"\n";
        let path = vec!["hotel".to_string()];
        assert_eq!(find_key_offset(content, &path, "language"), None);
    }

    #[test]
    fn find_key_offset_handles_crlf_and_indent() {
        let content = "[agent]\r\n  naem = \"x\"\r\n";
        let path = vec!["agent".to_string()];
        let o = find_key_offset(content, &path, "naem").unwrap();
        assert_eq!(&content[o..o + 4], "naem");
    }

    #[test]
    fn help_lists_valid_keys() {
        let keys = vec!["rows".to_string(), "language".to_string()];
        assert_eq!(
            unknown_key_help(Some("rows"), &keys),
            "did you mean `rows`? Valid keys: rows, language"
        );
        assert_eq!(unknown_key_help(None, &keys), "valid keys: rows, language");
    }
}
