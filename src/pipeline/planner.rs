// In: src/pipeline/planner.rs

//! The empirical planner behind smart compression.
//!
//! Rather than guessing from the data, it runs every registered codec against
//! the full input and keeps the best outcome:
//! 1. Each trial is a plain `orchestrator::compress` call. Trials are
//!    independent and run on the rayon pool when `parallel_trials` is set.
//! 2. A failing codec is logged and excluded; it never aborts the others.
//! 3. The survivors are ranked deterministically, so completion order has no
//!    influence on the winner.

use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::Instant;

use crate::config::CompressoConfig;
use crate::error::CompressoError;
use crate::pipeline::artifact::CompressionResult;
use crate::pipeline::orchestrator;
use crate::types::Algorithm;
use crate::utils::format_size;

//==================================================================================
// 1. Ranking
//==================================================================================

/// Orders two trial results best-first.
///
/// Effective beats ineffective; then the smaller payload; then the smaller raw
/// codec output; then registration order.
fn rank(a: &CompressionResult, b: &CompressionResult) -> Ordering {
    b.is_effective()
        .cmp(&a.is_effective())
        .then(a.compressed_size.cmp(&b.compressed_size))
        .then(
            a.stats
                .actual_compressed_size
                .cmp(&b.stats.actual_compressed_size),
        )
        .then(registration_index(a.algorithm).cmp(&registration_index(b.algorithm)))
}

fn registration_index(algorithm: Algorithm) -> usize {
    Algorithm::ALL
        .iter()
        .position(|&a| a == algorithm)
        .unwrap_or(usize::MAX)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Runs every registered algorithm over `input` and returns the best result,
/// with the full scoreboard in `tested_algorithms`.
pub fn smart_compress(
    input: &[u8],
    config: &CompressoConfig,
) -> Result<CompressionResult, CompressoError> {
    let start_overall = Instant::now();

    let run_trial = |&algorithm: &Algorithm| {
        (algorithm, orchestrator::compress(input, algorithm, config))
    };
    let outcomes: Vec<(Algorithm, Result<CompressionResult, CompressoError>)> =
        if config.parallel_trials {
            Algorithm::ALL[..].par_iter().map(run_trial).collect()
        } else {
            Algorithm::ALL[..].iter().map(run_trial).collect()
        };

    log::info!(
        "\n--- SMART COMPRESSION SCORING (input: {}) ---",
        format_size(input.len() as u64)
    );

    let mut survivors = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for (algorithm, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                log::info!(
                    "  - Candidate: {:<8} | Size: {:>10} | Raw: {:>10} | Ratio: {:>6.2}% | Effective: {} | Time: {:.2?}",
                    algorithm.name(),
                    result.compressed_size,
                    result.stats.actual_compressed_size,
                    result.ratio_percent,
                    result.is_effective(),
                    result.stats.processing_time,
                );
                survivors.push(result);
            }
            Err(e) => {
                log::warn!("  - Candidate: {:<8} | FAILED: {}", algorithm.name(), e);
                failures.push(format!("{}: {}", algorithm, e));
            }
        }
    }

    if survivors.is_empty() {
        return Err(CompressoError::NoCodecSucceeded(failures.join("; ")));
    }

    let tested_algorithms: Vec<_> = survivors.iter().map(CompressionResult::to_tested).collect();
    survivors.sort_by(rank);
    let mut best = survivors.swap_remove(0);
    best.tested_algorithms = tested_algorithms;

    log::info!(
        "--- Winner: {} ({:.2}%), total time: {:.2?} ---",
        best.algorithm,
        best.ratio_percent,
        start_overall.elapsed()
    );
    log_metric!(
        "event"="smart_compress",
        "winner"=best.algorithm,
        "compressed_size"=&best.compressed_size,
        "candidates"=&best.tested_algorithms.len()
    );

    Ok(best)
}
