// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` holds the BM25 math, `ranking` decides the order and the cut.
//! Both are shared by the v2 and v3 scorers so the two formats cannot drift.

mod core;
pub mod ranking;

pub use core::*;
