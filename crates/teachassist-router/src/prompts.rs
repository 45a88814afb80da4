// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System prompts for the one-word classification calls.

/// Teacher vs knowledge-base routing prompt.
pub const ROUTE_SYSTEM_PROMPT: &str = r#"
You route queries to either a Teacher agent or a Knowledge Base agent.

Output EXACTLY one word: "teacher" or "knowledgebase".

Send to knowledgebase only if the user intent is clearly about storing or recalling personal facts or prior saved info, e.g.:
- remember/save/store/record/note that ...
- my name is / I live in / my birthday is ...
- what did I tell you / what do you remember about ...
- retrieve/recall my ...

Otherwise, send to teacher for subject-matter questions (math, programming, grammar, translation, general questions).
Do not add explanations.
"#;

/// Store vs retrieve prompt.
pub const ACTION_SYSTEM_PROMPT: &str = r#"
You are a knowledge base assistant focusing ONLY on classifying user queries.
Your task is to determine whether a user query requires STORING information to a knowledge base
or RETRIEVING information from a knowledge base.

Reply with EXACTLY ONE WORD - either "store" or "retrieve".
"#;

/// User prompt wrapping the raw utterance for both classifiers.
pub fn query_prompt(utterance: &str) -> String {
    format!("Query: {utterance}")
}
