//! This module serves as the public API and dispatcher for the collection of all
//! pure, stateless compression and decompression kernels.
//!
//! It declares all kernel sub-modules and provides a single, unified dispatcher
//! for both encoding and decoding. The dispatcher is the sole entry point for the
//! `pipeline` layer: it takes an `Algorithm` and calls the matching kernel.
//! Dispatch is a closed `match`, so a new codec is a compile error until every
//! call site handles it.

use crate::config::CompressoConfig;
use crate::error::CompressoError;
use crate::types::{Algorithm, CodecMetadata, HuffmanMetadata};

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Entropy coding
pub mod huffman;

/// Dictionary coding
pub mod lz77;

/// Run coding
pub mod rle;

//==================================================================================
// 2. Public API (Unified Dispatchers)
//==================================================================================

/// The single, unified dispatcher for all ENCODE operations.
///
/// On success `output_buf` holds the raw kernel output and the returned
/// metadata is everything `dispatch_decode` needs to invert it.
pub fn dispatch_encode(
    algorithm: Algorithm,
    input_bytes: &[u8],
    output_buf: &mut Vec<u8>,
    config: &CompressoConfig,
) -> Result<CodecMetadata, CompressoError> {
    match algorithm {
        Algorithm::Huffman => {
            let tree = huffman::encode(input_bytes, output_buf)?;
            Ok(CodecMetadata::Huffman(HuffmanMetadata {
                tree,
                original_size: input_bytes.len(),
            }))
        }
        Algorithm::Rle => {
            rle::encode(input_bytes, output_buf)?;
            Ok(CodecMetadata::None)
        }
        Algorithm::Lz77 => {
            lz77::encode(input_bytes, output_buf, &config.lz77)?;
            Ok(CodecMetadata::None)
        }
    }
}

/// The single, unified dispatcher for all DECODE operations.
pub fn dispatch_decode(
    algorithm: Algorithm,
    input_bytes: &[u8],
    metadata: &CodecMetadata,
    output_buf: &mut Vec<u8>,
) -> Result<(), CompressoError> {
    match algorithm {
        Algorithm::Huffman => match metadata {
            CodecMetadata::Huffman(meta) => {
                huffman::decode(input_bytes, meta.tree.as_ref(), meta.original_size, output_buf)
            }
            CodecMetadata::None => Err(CompressoError::MissingMetadata(
                "Huffman decompression requires tree metadata".to_string(),
            )),
        },
        Algorithm::Rle => rle::decode(input_bytes, output_buf),
        Algorithm::Lz77 => lz77::decode(input_bytes, output_buf),
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn corpus() -> Vec<(&'static str, Vec<u8>)> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut random = vec![0u8; 2048];
        rng.fill(&mut random[..]);

        vec![
            ("empty", Vec::new()),
            ("single byte", vec![b'x']),
            ("all identical", vec![0xAA; 1000]),
            ("text", b"the quick brown fox jumps over the lazy dog ".repeat(20)),
            ("random", random),
            ("all byte values", (0..=255u8).collect()),
        ]
    }

    #[test]
    fn test_every_algorithm_roundtrips_the_corpus() {
        let config = CompressoConfig::default();
        for algorithm in Algorithm::ALL {
            for (label, input) in corpus() {
                let mut encoded = Vec::new();
                let metadata =
                    dispatch_encode(algorithm, &input, &mut encoded, &config).unwrap();

                let mut decoded = Vec::new();
                dispatch_decode(algorithm, &encoded, &metadata, &mut decoded).unwrap();
                assert_eq!(decoded, input, "{} failed on {}", algorithm, label);
            }
        }
    }

    #[test]
    fn test_only_huffman_produces_metadata() {
        let config = CompressoConfig::default();
        let mut encoded = Vec::new();

        let meta = dispatch_encode(Algorithm::Huffman, b"hello", &mut encoded, &config).unwrap();
        assert!(meta.huffman_tree().is_some());

        let meta = dispatch_encode(Algorithm::Rle, b"hello", &mut encoded, &config).unwrap();
        assert_eq!(meta, CodecMetadata::None);

        let meta = dispatch_encode(Algorithm::Lz77, b"hello", &mut encoded, &config).unwrap();
        assert_eq!(meta, CodecMetadata::None);
    }

    #[test]
    fn test_huffman_decode_without_metadata_fails() {
        let mut decoded = Vec::new();
        let result = dispatch_decode(Algorithm::Huffman, &[0xFF], &CodecMetadata::None, &mut decoded);
        assert!(matches!(result, Err(CompressoError::MissingMetadata(_))));
    }
}
