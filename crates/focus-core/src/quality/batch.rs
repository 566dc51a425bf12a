use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::error::Result;
use crate::io::decode::{decode, ImageSource};
use crate::quality::verdict::{score, Verdict};

/// Decode and score one source.
pub fn score_source(source: &ImageSource, threshold: f64) -> Result<Verdict> {
    let grid = decode(source)?;
    score(&grid, threshold)
}

/// Decode and score many sources in parallel.
///
/// Each source runs its own independent pipeline; results come back in
/// input order, one per source.
pub fn score_sources(sources: &[ImageSource], threshold: f64) -> Vec<Result<Verdict>> {
    sources
        .par_iter()
        .map(|source| score_source(source, threshold))
        .collect()
}

/// Decode and score many sources in parallel with per-source progress reporting.
///
/// Calls `on_progress(items_done)` as each source finishes.
pub fn score_sources_with_progress(
    sources: &[ImageSource],
    threshold: f64,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Vec<Result<Verdict>> {
    let done = AtomicUsize::new(0);
    sources
        .par_iter()
        .map(|source| {
            let result = score_source(source, threshold);
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(completed);
            result
        })
        .collect()
}
