//! This module defines the canonical, type-safe representation of the
//! compression algorithms the core knows about.

use crate::error::CompressoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of registered codecs.
///
/// Dispatch everywhere inside the crate matches on this enum; string names are
/// only parsed at the bridge boundary via `FromStr`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Huffman,
    Rle,
    Lz77,
}

impl Algorithm {
    /// Every registered algorithm, in registration order. Smart compression
    /// tries them in this order and uses it as the final tie-break.
    pub const ALL: [Algorithm; 3] = [Algorithm::Huffman, Algorithm::Rle, Algorithm::Lz77];

    /// The wire name used by the transport layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Huffman => "huffman",
            Self::Rle => "rle",
            Self::Lz77 => "lz77",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Huffman => "Huffman Coding: A lossless compression algorithm that uses variable-length codes for different byte values based on their frequency. More frequent bytes get shorter codes.",
            Self::Rle => "Run-Length Encoding: A simple compression method that replaces sequences of identical data elements with a count and the element value.",
            Self::Lz77 => "LZ77: A dictionary-based compression algorithm that replaces repeated occurrences of data with references to earlier occurrences in the data stream.",
        }
    }

    /// Returns `true` if decompression needs codec metadata from the compress call.
    pub fn requires_metadata(&self) -> bool {
        matches!(self, Self::Huffman)
    }
}

impl FromStr for Algorithm {
    type Err = CompressoError;

    /// Names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "huffman" => Ok(Self::Huffman),
            "rle" => Ok(Self::Rle),
            "lz77" => Ok(Self::Lz77),
            _ => Err(CompressoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Provides the canonical string representation for an `Algorithm`.
impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
