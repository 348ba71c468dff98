// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning text into index terms.
//!
//! The rules are deliberately blunt: lowercase, treat every run of characters
//! outside `[a-z0-9]` as a separator, drop anything shorter than two characters.
//! Accented letters are separators too, so "café" indexes as "caf".
//!
//! Field weighting happens here rather than in the scorer. A title token is
//! emitted three times, so by the time the builder counts frequencies a title
//! hit simply looks like three occurrences. No positions survive.
//!
//! Queries go through [`query_tokens`], which uses the same splitting but keeps
//! stop words. Those can never match (they were never indexed), which is the
//! existing behavior and is kept on purpose.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Minimum token length in bytes (all tokens are ASCII).
pub const MIN_TOKEN_LEN: usize = 2;

/// Field weights: how many times a token is emitted per occurrence.
pub const TITLE_WEIGHT: usize = 3;
pub const TAG_WEIGHT: usize = 2;
pub const AUTHOR_WEIGHT: usize = 1;
pub const EXCERPT_WEIGHT: usize = 1;
pub const CONTENT_WEIGHT: usize = 1;

const STOP_WORD_LIST: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with", "you", "your", "i", "we", "our", "from",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check if a word is dropped at index time.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[inline]
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Lowercase and split on runs of non `[a-z0-9]`, keeping tokens of length >= 2.
fn split_terms(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_token_char(c))
        .filter(|term| term.len() >= MIN_TOKEN_LEN)
}

/// Tokenize one field, emitting every surviving token `weight` times.
///
/// Output is deterministic: same input, same vector, in text order.
pub fn tokenize(text: &str, weight: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    for term in split_terms(&lowered).filter(|term| !is_stop_word(term)) {
        for _ in 0..weight {
            tokens.push(term.to_string());
        }
    }
    tokens
}

/// Tokenize a search query. Same splitting as [`tokenize`], no stop-word filter.
pub fn query_tokens(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    split_terms(&lowered).map(str::to_string).collect()
}
