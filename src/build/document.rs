// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-post tokenization into a weighted bag of terms.

use std::collections::HashMap;

use crate::tokenize::{
    tokenize, AUTHOR_WEIGHT, CONTENT_WEIGHT, EXCERPT_WEIGHT, TAG_WEIGHT, TITLE_WEIGHT,
};
use crate::types::{DocMeta, Post};

/// A tokenized post, ready to be merged into the corpus.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub meta: DocMeta,
    /// Weighted token count (sum of `tf`).
    pub dl: u32,
    /// Term frequencies in first-seen order.
    pub tf: Vec<(String, u32)>,
}

impl Document {
    /// Tokenize fields in order: title, author, tags, excerpt, content.
    pub fn from_post(post: &Post) -> Self {
        let mut stream = tokenize(&post.title, TITLE_WEIGHT);
        stream.extend(tokenize(&post.author, AUTHOR_WEIGHT));
        for tag in &post.tags {
            stream.extend(tokenize(tag, TAG_WEIGHT));
        }
        if let Some(excerpt) = &post.excerpt {
            stream.extend(tokenize(excerpt, EXCERPT_WEIGHT));
        }
        stream.extend(tokenize(&post.content, CONTENT_WEIGHT));

        let dl = stream.len() as u32;
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut tf: Vec<(String, u32)> = Vec::new();
        for token in stream {
            match slots.get(&token) {
                Some(&slot) => tf[slot].1 += 1,
                None => {
                    slots.insert(token.clone(), tf.len());
                    tf.push((token, 1));
                }
            }
        }

        Document {
            meta: post.meta(),
            dl,
            tf,
        }
    }

    /// Frequency of `token` in this document (0 if absent).
    pub fn frequency(&self, token: &str) -> u32 {
        self.tf
            .iter()
            .find(|(term, _)| term == token)
            .map_or(0, |(_, freq)| *freq)
    }
}

/// Lowercase haystack used by legacy artifacts for substring search.
pub fn legacy_haystack(post: &Post) -> String {
    let mut parts: Vec<&str> = vec![&post.title, &post.author];
    parts.extend(post.tags.iter().map(String::as_str));
    if let Some(excerpt) = &post.excerpt {
        parts.push(excerpt);
    }
    parts.push(&post.content);
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
