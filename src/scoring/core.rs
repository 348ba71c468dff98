// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Plain Okapi BM25 with the `+1` smoothed IDF:
//!
//! ```text
//! idf(t)      = ln((N - df + 0.5) / (df + 0.5) + 1)
//! score(t, d) = idf(t) * tf * (k1 + 1) / (tf + k1 * (1 - b + b * dl / avdl))
//! ```
//!
//! The `+1` keeps IDF positive even when a term appears in every document, so
//! a match never subtracts from a score.
//!
//! # Guards
//!
//! | Quantity    | Guard                          |
//! |-------------|--------------------------------|
//! | `N`         | floored at 1                   |
//! | `avdl`      | 1 substituted when it is <= 0  |
//! | denominator | 1 substituted when it is <= 0  |

/// Term frequency saturation.
pub const K1: f64 = 1.2;

/// Length normalization strength.
pub const B: f64 = 0.75;

/// Inverse document frequency with `+1` smoothing.
///
/// Strictly decreasing in `df` for a fixed `n`, and always positive.
#[inline]
pub fn idf(n: u32, df: u32) -> f64 {
    let n = f64::from(n.max(1));
    let df = f64::from(df);
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// `avdl` as used in the length ratio: never zero.
#[inline]
pub fn effective_avdl(avdl: f64) -> f64 {
    if avdl > 0.0 {
        avdl
    } else {
        1.0
    }
}

/// Contribution of one query term to one document.
#[inline]
pub fn term_score(idf: f64, tf: u32, dl: u32, avdl: f64) -> f64 {
    let tf = f64::from(tf);
    let length_ratio = f64::from(dl) / effective_avdl(avdl);
    let mut denominator = tf + K1 * (1.0 - B + B * length_ratio);
    if denominator <= 0.0 {
        denominator = 1.0;
    }
    idf * (tf * (K1 + 1.0)) / denominator
}
