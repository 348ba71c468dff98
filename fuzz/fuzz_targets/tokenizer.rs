// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer under arbitrary text.
//!
//! Post bodies come from whatever the content pipeline exported: emoji,
//! combining marks, characters whose lowercase form is longer than the
//! original. The tokenizer has to shrug all of it off and still emit only
//! `[a-z0-9]{2,}`.

#![no_main]

use arbitrary::Arbitrary;
use folio::tokenize::{is_stop_word, query_tokens, tokenize};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    weight: u8,
}

fuzz_target!(|input: Input<'_>| {
    let weight = usize::from(input.weight % 4);
    let tokens = tokenize(input.text, weight);

    // INVARIANT 1: Deterministic
    assert_eq!(tokens, tokenize(input.text, weight));

    // INVARIANT 2: Every token is lowercase ASCII alphanumeric, length >= 2
    for token in &tokens {
        assert!(token.len() >= 2, "short token {:?}", token);
        assert!(
            token.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
            "bad token {:?}",
            token
        );
        assert!(!is_stop_word(token), "stop word leaked: {:?}", token);
    }

    // INVARIANT 3: Weight multiplies the stream
    assert_eq!(tokens.len(), tokenize(input.text, 1).len() * weight);

    // INVARIANT 4: Query tokens obey the same shape
    for token in query_tokens(input.text) {
        assert!(token.len() >= 2);
    }
});
