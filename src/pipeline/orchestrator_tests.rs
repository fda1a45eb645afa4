use crate::config::CompressoConfig;
use crate::error::CompressoError;
use crate::pipeline::orchestrator::{compress, decompress};
use crate::types::{Algorithm, CodecMetadata};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test Helpers
fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    bytes
}

/// Compresses and, unless the orchestrator fell back, decompresses again.
fn roundtrip(input: &[u8], algorithm: Algorithm) -> Vec<u8> {
    let result = compress(input, algorithm, &CompressoConfig::default()).unwrap();
    if result.stats.fallback_to_original {
        return result.compressed;
    }
    decompress(&result.compressed, algorithm, &result.metadata).unwrap()
}

#[test]
fn test_roundtrip_for_every_algorithm() {
    let inputs = vec![
        b"hello world, hello compression".to_vec(),
        vec![b'z'; 4000],
        b"ABCABCABCABCABCABCABCABCABCABC".repeat(10),
        random_bytes(3000, 1),
    ];
    for algorithm in Algorithm::ALL {
        for input in &inputs {
            assert_eq!(&roundtrip(input, algorithm), input, "{}", algorithm);
        }
    }
}

#[test]
fn test_ratio_is_rounded_to_two_decimals() {
    // 1000 identical bytes -> 4 RLE records -> 8 bytes.
    let result = compress(&[7u8; 1000], Algorithm::Rle, &CompressoConfig::default()).unwrap();
    assert_eq!(result.compressed_size, 8);
    assert_eq!(result.ratio_percent, 99.2);

    // 3 identical bytes -> 1 RLE record -> 2 bytes: 33.333...% -> 33.33%.
    let result = compress(b"aaa", Algorithm::Rle, &CompressoConfig::default()).unwrap();
    assert_eq!(result.compressed_size, 2);
    assert_eq!(result.ratio_percent, 33.33);
    assert!(result.is_effective());
}

#[test]
fn test_ineffective_codec_falls_back_to_original() {
    // No runs at all: RLE doubles the size.
    let input = b"abcdefghij";
    let result = compress(input, Algorithm::Rle, &CompressoConfig::default()).unwrap();

    assert!(result.stats.fallback_to_original);
    assert!(!result.is_effective());
    assert_eq!(result.compressed, input.to_vec());
    assert_eq!(result.compressed_size, input.len());
    assert_eq!(result.ratio_percent, 0.0);
    assert_eq!(result.stats.actual_compressed_size, 20);
    assert_eq!(result.stats.compression_increase, 10);
}

#[test]
fn test_equal_size_output_also_falls_back() {
    let result = compress(b"ab", Algorithm::Rle, &CompressoConfig::default()).unwrap();
    assert!(result.stats.fallback_to_original);
    assert_eq!(result.stats.compression_increase, 2);

    // One run of two: the record is exactly as long as the input.
    let result = compress(b"aa", Algorithm::Rle, &CompressoConfig::default()).unwrap();
    assert_eq!(result.stats.actual_compressed_size, 2);
    assert!(result.stats.fallback_to_original);
    assert_eq!(result.stats.compression_increase, 0);
}

#[test]
fn test_empty_input_reports_zero_ratio() {
    for algorithm in Algorithm::ALL {
        let result = compress(&[], algorithm, &CompressoConfig::default()).unwrap();
        assert_eq!(result.original_size, 0);
        assert_eq!(result.compressed_size, 0);
        assert_eq!(result.ratio_percent, 0.0);
        assert!(result.compressed.is_empty());
    }
}

#[test]
fn test_huffman_result_carries_tree_metadata() {
    let input = b"mississippi river";
    let result = compress(input, Algorithm::Huffman, &CompressoConfig::default()).unwrap();
    match &result.metadata {
        CodecMetadata::Huffman(meta) => {
            assert_eq!(meta.original_size, input.len());
            assert_eq!(meta.tree.as_ref().map(|t| t.frequency), Some(input.len() as u64));
        }
        other => panic!("expected Huffman metadata, got {:?}", other),
    }
}

#[test]
fn test_huffman_decompress_requires_metadata() {
    let err = decompress(&[0b1010_0000], Algorithm::Huffman, &CodecMetadata::None).unwrap_err();
    assert!(matches!(err, CompressoError::MissingMetadata(_)));
}

#[test]
fn test_rle_and_lz77_ignore_metadata() {
    let input = vec![b'q'; 600];
    for algorithm in [Algorithm::Rle, Algorithm::Lz77] {
        let result = compress(&input, algorithm, &CompressoConfig::default()).unwrap();
        assert!(!result.stats.fallback_to_original);
        let decoded = decompress(&result.compressed, algorithm, &CodecMetadata::None).unwrap();
        assert_eq!(decoded, input);
    }
}

#[test]
fn test_malformed_payload_is_rejected_without_partial_output() {
    let err = decompress(&[b'A', 3, b'B'], Algorithm::Rle, &CodecMetadata::None).unwrap_err();
    assert!(matches!(err, CompressoError::MalformedStream(_)));

    let err = decompress(&[0, 9, 2, b'x'], Algorithm::Lz77, &CodecMetadata::None).unwrap_err();
    assert!(matches!(err, CompressoError::MalformedStream(_)));
}

#[test]
fn test_invalid_lz77_config_propagates() {
    let mut config = CompressoConfig::default();
    config.lz77.window_size = 0;
    let err = compress(b"abcabc", Algorithm::Lz77, &config).unwrap_err();
    assert!(matches!(err, CompressoError::InvalidConfig(_)));
}
