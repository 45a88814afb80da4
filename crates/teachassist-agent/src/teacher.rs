// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subject-matter answers under the TeachAssist orchestrator prompt.

use std::sync::Arc;

use strum::{Display, EnumIter};
use teachassist_config::TeachAssistConfig;
use teachassist_core::{ProviderAdapter, ProviderMessage, ProviderRequest, TeachAssistError};
use tracing::debug;

pub const TEACHER_SYSTEM_PROMPT: &str = "
You are TeachAssist, a sophisticated educational orchestrator designed to coordinate educational support across multiple subjects. Your role is to:

1. Analyze incoming student queries and determine the most appropriate specialized agent to handle them:
   - Math Agent: For mathematical calculations, problems, and concepts
   - English Agent: For writing, grammar, literature, and composition
   - Language Agent: For translation and language-related queries
   - Computer Science Agent: For programming, algorithms, data structures, and code execution
   - General Assistant: For all other topics outside these specialized domains

2. Key Responsibilities:
   - Accurately classify student queries by subject area
   - Route requests to the appropriate specialized agent
   - Maintain context and coordinate multi-step problems
   - Ensure cohesive responses when multiple agents are needed

3. Decision Protocol:
   - If query involves calculations/numbers → Math Agent
   - If query involves writing/literature/grammar → English Agent
   - If query involves translation → Language Agent
   - If query involves programming/coding/algorithms/computer science → Computer Science Agent
   - If query is outside these specialized areas → General Assistant
   - For complex queries, coordinate multiple agents as needed

Always confirm your understanding before routing to ensure accurate assistance.
";

const COMPUTER_SCIENCE_WORDS: &[&str] = &[
    "algorithm", "algorithms", "code", "coding", "compile", "compiler", "debug", "function",
    "java", "javascript", "program", "programming", "python", "recursion", "rust", "sql",
    "array", "struct", "loop",
];
const COMPUTER_SCIENCE_PHRASES: &[&str] = &["data structure", "linked list", "big o", "computer science"];

const LANGUAGE_WORDS: &[&str] = &[
    "translate", "translation", "spanish", "french", "german", "italian", "japanese", "chinese",
    "portuguese",
];
const LANGUAGE_PHRASES: &[&str] = &["how do you say", "in another language"];

const MATH_WORDS: &[&str] = &[
    "algebra", "calculate", "calculus", "derivative", "divide", "equation", "fraction",
    "geometry", "integral", "math", "mathematics", "multiply", "percent", "percentage", "solve",
    "sqrt", "sum", "times",
];

const ENGLISH_WORDS: &[&str] = &[
    "essay", "grammar", "literature", "novel", "paragraph", "poem", "poetry", "punctuation",
    "sentence", "spelling", "synonym", "vocabulary", "write", "writing",
];

/// Specialist focus appended to the orchestrator prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Subject {
    Math,
    English,
    Language,
    ComputerScience,
    General,
}

impl Subject {
    /// Keyword guess at the subject. Checked in the order computer science,
    /// language, math, English; anything unmatched is `General`.
    pub fn detect(query: &str) -> Self {
        let lower = query.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let has_word = |list: &[&str]| words.iter().any(|w| list.iter().any(|k| *k == *w));
        let has_phrase = |list: &[&str]| list.iter().any(|p| lower.contains(p));

        if has_word(COMPUTER_SCIENCE_WORDS) || has_phrase(COMPUTER_SCIENCE_PHRASES) {
            Subject::ComputerScience
        } else if has_word(LANGUAGE_WORDS) || has_phrase(LANGUAGE_PHRASES) {
            Subject::Language
        } else if has_word(MATH_WORDS) || looks_like_arithmetic(&lower) {
            Subject::Math
        } else if has_word(ENGLISH_WORDS) {
            Subject::English
        } else {
            Subject::General
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Subject::Math => {
                "Act as the Math Agent. Show each step of the working, state the final answer clearly, and check it."
            }
            Subject::English => {
                "Act as the English Agent. Explain grammar and style choices, quote the student's text when correcting it, and suggest improvements."
            }
            Subject::Language => {
                "Act as the Language Agent. Give the translation first, then note any idioms, register, or pronunciation the student should know."
            }
            Subject::ComputerScience => {
                "Act as the Computer Science Agent. Explain the concept, give a short correct code example in a fenced block, and mention time and space complexity where relevant."
            }
            Subject::General => {
                "Act as the General Assistant. Give an accurate, concise answer and say so plainly when you are unsure."
            }
        }
    }
}

/// A digit next to an arithmetic operator, e.g. `2+2` or `12 * 4`.
fn looks_like_arithmetic(text: &str) -> bool {
    let compact: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact.windows(2).any(|w| {
        (w[0].is_ascii_digit() && "+-*/^=".contains(w[1]))
            || ("+-*/^=".contains(w[0]) && w[1].is_ascii_digit())
    })
}

/// Full system prompt for a subject.
pub fn system_prompt(subject: Subject) -> String {
    format!("{TEACHER_SYSTEM_PROMPT}\nSpecialist focus: {}\n", subject.instruction())
}

/// Answers subject-matter questions with recent history as context.
pub struct TeacherAgent {
    provider: Arc<dyn ProviderAdapter>,
    model: String,
    max_tokens: u32,
    temperature: f32,
    history_turns: usize,
}

impl TeacherAgent {
    pub fn new(provider: Arc<dyn ProviderAdapter>, config: &TeachAssistConfig) -> Self {
        Self {
            provider,
            model: config.anthropic.default_model.clone(),
            max_tokens: config.anthropic.max_tokens,
            temperature: config.anthropic.temperature,
            history_turns: config.agent.history_turns,
        }
    }

    /// Build the request: the last `history_turns` messages of `history`
    /// (never starting on an assistant message) followed by `query`.
    pub fn build_request(&self, query: &str, history: &[ProviderMessage]) -> ProviderRequest {
        let subject = Subject::detect(query);
        let start = history.len().saturating_sub(self.history_turns);
        let mut messages: Vec<ProviderMessage> = history[start..]
            .iter()
            .skip_while(|m| m.role != "user")
            .cloned()
            .collect();
        messages.push(ProviderMessage::user(query));

        debug!(%subject, prior_messages = messages.len() - 1, "teacher request built");
        ProviderRequest {
            model: self.model.clone(),
            system_prompt: Some(system_prompt(subject)),
            messages,
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }

    pub async fn answer(
        &self,
        query: &str,
        history: &[ProviderMessage],
    ) -> Result<String, TeachAssistError> {
        let request = self.build_request(query, history);
        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use teachassist_test_utils::MockProvider;

    #[test]
    fn detects_subjects() {
        assert_eq!(Subject::detect("What is 2+2?"), Subject::Math);
        assert_eq!(Subject::detect("Solve the equation x^2 = 9"), Subject::Math);
        assert_eq!(Subject::detect("Write a Python function to reverse a list"), Subject::ComputerScience);
        assert_eq!(Subject::detect("Explain a linked list"), Subject::ComputerScience);
        assert_eq!(Subject::detect("Translate this sentence to French"), Subject::Language);
        assert_eq!(Subject::detect("How do you say thank you?"), Subject::Language);
        assert_eq!(Subject::detect("Fix the grammar in my essay"), Subject::English);
        assert_eq!(Subject::detect("Who painted the Mona Lisa?"), Subject::General);
    }

    #[test]
    fn words_match_whole_tokens() {
        // "summary" must not match "sum".
        assert_eq!(Subject::detect("Give me a summary of the French revolution"), Subject::Language);
        assert_eq!(Subject::detect("Give me a summary of the revolution"), Subject::General);
    }

    #[test]
    fn every_subject_has_distinct_instruction() {
        let instructions: Vec<&str> = Subject::iter().map(Subject::instruction).collect();
        for (i, a) in instructions.iter().enumerate() {
            assert!(instructions[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn system_prompt_appends_focus() {
        let prompt = system_prompt(Subject::Math);
        assert!(prompt.starts_with(TEACHER_SYSTEM_PROMPT));
        assert!(prompt.contains("Math Agent. Show each step"));
    }

    fn agent(provider: Arc<MockProvider>, turns: usize) -> TeacherAgent {
        let mut config = TeachAssistConfig::default();
        config.agent.history_turns = turns;
        TeacherAgent::new(provider, &config)
    }

    #[test]
    fn history_is_truncated_and_starts_on_user() {
        let history = vec![
            ProviderMessage::user("q1"),
            ProviderMessage::assistant("a1"),
            ProviderMessage::user("q2"),
            ProviderMessage::assistant("a2"),
        ];
        let request = agent(Arc::new(MockProvider::new()), 3).build_request("q3", &history);
        let contents: Vec<&str> = request.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q2", "a2", "q3"]);
        assert_eq!(request.temperature, Some(0.3));
    }

    #[test]
    fn zero_turns_sends_only_query() {
        let history = vec![ProviderMessage::user("q1"), ProviderMessage::assistant("a1")];
        let request = agent(Arc::new(MockProvider::new()), 0).build_request("q2", &history);
        assert_eq!(request.messages.len(), 1);
    }

    #[tokio::test]
    async fn answer_returns_model_text() {
        let provider = Arc::new(MockProvider::with_responses(vec!["4"]));
        let reply = agent(provider.clone(), 6).answer("What is 2+2?", &[]).await.unwrap();
        assert_eq!(reply, "4");
        let requests = provider.requests().await;
        assert!(requests[0].system_prompt.as_deref().unwrap().contains("Math Agent. Show"));
    }
}
