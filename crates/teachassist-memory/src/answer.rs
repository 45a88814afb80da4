// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Direct answers for a few narrow question shapes.
//!
//! Birthday, residence, and name questions are answered from stored facts by
//! pattern match, with no model call.

use std::sync::LazyLock;

use regex::Regex;

static BIRTHDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)birthday\s+is\s+([^\n".]+)"#).expect("valid regex"));
static RESIDENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)i\s+live\s+in\s+([^\n".]+)"#).expect("valid regex"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)my\s+name\s+is\s+([^\n".]+)"#).expect("valid regex"));

/// The question shapes answerable without a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Birthday,
    Residence,
    Name,
}

impl QuestionKind {
    /// Tried in this order by [`answer_from_memory`].
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::Birthday,
        QuestionKind::Residence,
        QuestionKind::Name,
    ];

    /// Whether `query` asks this kind of question.
    pub fn asked_by(self, query: &str) -> bool {
        let q = query.to_lowercase();
        match self {
            QuestionKind::Birthday => q.contains("birthday"),
            QuestionKind::Residence => q.contains("where do i live") || q.contains("where i live"),
            QuestionKind::Name => q.contains("my name"),
        }
    }

    /// First kind the query asks about, if any.
    pub fn detect(query: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.asked_by(query))
    }

    fn pattern(self) -> &'static Regex {
        match self {
            QuestionKind::Birthday => &*BIRTHDAY,
            QuestionKind::Residence => &*RESIDENCE,
            QuestionKind::Name => &*NAME,
        }
    }

    fn render(self, value: &str) -> String {
        match self {
            QuestionKind::Birthday => {
                format!("Your birthday is {}.", value.replace("oktober", "october"))
            }
            QuestionKind::Residence => format!("You live in {value}."),
            QuestionKind::Name => format!("Your name is {value}."),
        }
    }
}

/// Answer `query` directly from `entries`, or `None` when no pattern applies.
///
/// Every kind the query asks about is tried in [`QuestionKind::ALL`] order;
/// the first one with a stored value answers.
pub fn answer_from_memory<S: AsRef<str>>(query: &str, entries: &[S]) -> Option<String> {
    let blob = entries
        .iter()
        .map(|e| e.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");

    QuestionKind::ALL
        .into_iter()
        .filter(|kind| kind.asked_by(query))
        .find_map(|kind| {
            let captures = kind.pattern().captures(&blob)?;
            let value = captures.get(1)?.as_str().trim();
            Some(kind.render(value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_with_oktober_fix() {
        assert_eq!(
            answer_from_memory("what is my birthday", &["my birthday is 12 oktober"]),
            Some("Your birthday is 12 october.".to_string())
        );
    }

    #[test]
    fn birthday_without_entries() {
        let none: [&str; 0] = [];
        assert_eq!(answer_from_memory("what is my birthday", &none), None);
    }

    #[test]
    fn oktober_fix_is_case_sensitive_substring() {
        assert_eq!(
            answer_from_memory("When is my Birthday?", &["My BIRTHDAY is 3 Oktober"]),
            Some("Your birthday is 3 Oktober.".to_string())
        );
    }

    #[test]
    fn residence_answer_stops_at_period() {
        assert_eq!(
            answer_from_memory("where do I live?", &["I live in Berlin. It is nice."]),
            Some("You live in Berlin.".to_string())
        );
        assert_eq!(
            answer_from_memory("remind me where i live", &["i  live\tin  Lagos"]),
            Some("You live in Lagos.".to_string())
        );
    }

    #[test]
    fn name_answer() {
        assert_eq!(
            answer_from_memory(
                "what is my name",
                &["favourite colour is green", "my name is Ada Lovelace"]
            ),
            Some("Your name is Ada Lovelace.".to_string())
        );
    }

    #[test]
    fn missing_birthday_falls_through_to_residence() {
        assert_eq!(
            answer_from_memory("my birthday and where do i live", &["I live in Rome"]),
            Some("You live in Rome.".to_string())
        );
    }

    #[test]
    fn stored_birthday_still_takes_precedence() {
        assert_eq!(
            answer_from_memory(
                "my birthday and my name",
                &["my name is Ada", "my birthday is 10 December"]
            ),
            Some("Your birthday is 10 December.".to_string())
        );
    }

    #[test]
    fn falls_through_to_name() {
        assert_eq!(
            answer_from_memory("birthday, where i live, my name", &["my name is Grace"]),
            Some("Your name is Grace.".to_string())
        );
    }

    #[test]
    fn unasked_kind_is_never_answered() {
        assert_eq!(answer_from_memory("what is my birthday", &["I live in Rome"]), None);
    }

    #[test]
    fn unrelated_question_is_none() {
        assert_eq!(answer_from_memory("what is my favourite food", &["I like pizza"]), None);
    }

    #[test]
    fn value_stops_at_quote_and_newline() {
        assert_eq!(
            answer_from_memory("birthday?", &["birthday is 1 May\"extra", "other"]),
            Some("Your birthday is 1 May.".to_string())
        );
    }

    #[test]
    fn first_match_in_blob_wins() {
        let entries = vec!["my name is Ada".to_string(), "my name is Grace".to_string()];
        assert_eq!(
            answer_from_memory("what's my name", &entries),
            Some("Your name is Ada.".to_string())
        );
    }

    #[test]
    fn detect_precedence() {
        assert_eq!(QuestionKind::detect("BIRTHDAY"), Some(QuestionKind::Birthday));
        assert_eq!(QuestionKind::detect("where I live"), Some(QuestionKind::Residence));
        assert_eq!(QuestionKind::detect("say my name"), Some(QuestionKind::Name));
        assert_eq!(QuestionKind::detect("hello"), None);
    }
}
