//! Answer matching for typing and voice study modes.

use serde::{Deserialize, Serialize};

/// Symbols removed before comparing answers.
const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Result of comparing a typed answer to the expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the normalized answers are identical.
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized expected answer (for display).
    pub expected_normalized: String,
}

/// Lowercase, trim and strip punctuation. Internal whitespace is kept as is.
pub fn normalize_answer(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}

/// Exact comparison after normalization.
///
/// Callers must not submit empty input; an empty answer is never graded.
pub fn is_match(typed: &str, expected: &str) -> bool {
    normalize_answer(typed) == normalize_answer(expected)
}

pub fn compare_answers(typed: &str, expected: &str) -> MatchResult {
    let typed_normalized = normalize_answer(typed);
    let expected_normalized = normalize_answer(expected);
    MatchResult {
        is_correct: typed_normalized == expected_normalized,
        typed_normalized,
        expected_normalized,
    }
}
