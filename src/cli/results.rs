// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `folio search`: run the scorer against an artifact on disk.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use folio::{search_hits, Artifact, ArtifactKind, Hit};

use super::display::*;

pub fn run(path: &Path, query: &str, limit: usize) -> anyhow::Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let artifact =
        Artifact::from_slice(&bytes).with_context(|| format!("decoding {}", path.display()))?;

    let started = Instant::now();
    let hits = search_hits(&artifact, query, limit);
    let elapsed = started.elapsed();

    let scored = artifact.kind() != ArtifactKind::Legacy;
    section_top("SEARCH");
    field("query", &format!("{:?}", query));
    field("artifact", &kind_badge(artifact.kind()));
    field(
        "results",
        &format!(
            "{} of {} docs in {:.3} ms",
            hits.len(),
            artifact.doc_count(),
            elapsed.as_secs_f64() * 1000.0
        ),
    );

    if hits.is_empty() {
        section_mid("NO MATCHES");
    } else {
        section_mid("RESULTS");
        for (i, hit) in hits.iter().enumerate() {
            print_hit(i + 1, hit, scored);
        }
    }
    section_bot();
    Ok(())
}

fn print_hit(rank: usize, hit: &Hit<'_>, scored: bool) {
    let meta = hit.meta;
    row(&format!(
        " {} {} {}",
        rank_label(rank),
        score_value(hit.score, scored),
        themed(BRIGHT_CYAN, &[BOLD], &truncate(&meta.title, 60)),
    ));

    let mut detail = vec![dim(&truncate(&meta.date, 10))];
    if let Some(path) = &meta.path {
        detail.push(link(&truncate(path, 40)));
    }
    if let Some(tags) = &meta.tags {
        detail.push(dim(&truncate(&tags.join(", "), 24)));
    }
    row(&format!("             {}", detail.join("  ")));
}
