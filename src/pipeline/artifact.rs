//! Defines the in-memory result of a single compression call.
//!
//! `CompressionResult` is the single source of truth for what the orchestrator
//! and the planner hand back to the bridge: the payload, the size metrics, the
//! codec metadata needed to decompress, and the size-guard statistics.

use serde::Serialize;
use std::time::Duration;

use crate::types::{Algorithm, CodecMetadata};

//==================================================================================
// Public Structs
//==================================================================================

/// Size-guard and timing statistics for one compression call.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Wall-clock time spent inside the codec.
    pub processing_time: Duration,
    /// The codec's raw output size, before the fallback policy was applied.
    pub actual_compressed_size: usize,
    /// True when the codec did not shrink the input and the original bytes
    /// were returned instead.
    pub fallback_to_original: bool,
    /// How many bytes the codec output would have added. Zero unless
    /// `fallback_to_original` is set.
    pub compression_increase: usize,
}

/// One line of the smart-compression scoreboard.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TestedAlgorithm {
    pub algorithm: Algorithm,
    pub compressed_size: usize,
    pub raw_compressed_size: usize,
    pub ratio_percent: f64,
    pub effective: bool,
}

/// The outcome of compressing one buffer with one algorithm.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CompressionResult {
    /// The payload to store or transmit. Equal to the input when
    /// `stats.fallback_to_original` is set.
    pub compressed: Vec<u8>,
    pub original_size: usize,
    /// Length of `compressed`.
    pub compressed_size: usize,
    /// `(1 - compressed_size / original_size) * 100`, rounded to two decimals.
    pub ratio_percent: f64,
    pub algorithm: Algorithm,
    pub metadata: CodecMetadata,
    pub stats: CompressionStats,
    /// Only populated by smart compression.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tested_algorithms: Vec<TestedAlgorithm>,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl CompressionResult {
    /// True iff the codec's raw output was strictly smaller than the input.
    pub fn is_effective(&self) -> bool {
        self.stats.actual_compressed_size < self.original_size
    }

    /// Condenses this result into a scoreboard line.
    pub fn to_tested(&self) -> TestedAlgorithm {
        TestedAlgorithm {
            algorithm: self.algorithm,
            compressed_size: self.compressed_size,
            raw_compressed_size: self.stats.actual_compressed_size,
            ratio_percent: self.ratio_percent,
            effective: self.is_effective(),
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
