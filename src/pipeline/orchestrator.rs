// In: src/pipeline/orchestrator.rs

//! The compression orchestrator.
//!
//! This is the single place where a named codec is run against a buffer and its
//! output is judged. It acts as a coordinator:
//! 1. Dispatch to the kernel through the closed `Algorithm` enum.
//! 2. Measure processing time, output size and ratio.
//! 3. Apply the fallback policy: a codec that does not strictly shrink the input
//!    never makes the payload bigger; the original bytes are returned instead.
//!
//! A fallback payload is the input itself, so it is not decodable by the named
//! algorithm. Callers check `stats.fallback_to_original` before decompressing.

use std::time::Instant;

use crate::config::CompressoConfig;
use crate::error::CompressoError;
use crate::kernels;
use crate::pipeline::artifact::{CompressionResult, CompressionStats};
use crate::types::{Algorithm, CodecMetadata};
use crate::utils::{format_size, round2};

//==================================================================================
// 1. Public Orchestration API
//==================================================================================

/// Compresses `input` with `algorithm` and applies the fallback policy.
pub fn compress(
    input: &[u8],
    algorithm: Algorithm,
    config: &CompressoConfig,
) -> Result<CompressionResult, CompressoError> {
    let start = Instant::now();
    let mut encoded = Vec::new();
    let metadata = kernels::dispatch_encode(algorithm, input, &mut encoded, config)?;
    let processing_time = start.elapsed();

    let original_size = input.len();
    let raw_size = encoded.len();
    let effective = raw_size < original_size;

    log::debug!(
        "{} compressed {} -> {} in {:.2?}",
        algorithm,
        format_size(original_size as u64),
        format_size(raw_size as u64),
        processing_time
    );

    let (compressed, ratio_percent, compression_increase) = if effective {
        let ratio = round2((1.0 - raw_size as f64 / original_size as f64) * 100.0);
        (encoded, ratio, 0)
    } else {
        log_metric!(
            "event"="fallback_to_original",
            "algorithm"=algorithm,
            "original_size"=&original_size,
            "raw_compressed_size"=&raw_size
        );
        (input.to_vec(), 0.0, raw_size - original_size)
    };

    Ok(CompressionResult {
        compressed_size: compressed.len(),
        compressed,
        original_size,
        ratio_percent,
        algorithm,
        metadata,
        stats: CompressionStats {
            processing_time,
            actual_compressed_size: raw_size,
            fallback_to_original: !effective,
            compression_increase,
        },
        tested_algorithms: Vec::new(),
    })
}

/// Inverts a non-fallback `compress` call.
///
/// Huffman requires `CodecMetadata::Huffman`; RLE and LZ77 ignore `metadata`.
pub fn decompress(
    input: &[u8],
    algorithm: Algorithm,
    metadata: &CodecMetadata,
) -> Result<Vec<u8>, CompressoError> {
    let start = Instant::now();
    let mut decoded = Vec::new();
    kernels::dispatch_decode(algorithm, input, metadata, &mut decoded)?;

    log::debug!(
        "{} decompressed {} -> {} in {:.2?}",
        algorithm,
        format_size(input.len() as u64),
        format_size(decoded.len() as u64),
        start.elapsed()
    );

    Ok(decoded)
}
