// In: src/bridge/stateless_api.rs

use std::sync::Arc;

use crate::bridge::format::{AlgorithmCatalog, TransportMetadata};
use crate::config::CompressoConfig;
use crate::error::CompressoError;
use crate::pipeline::{self, CompressionResult, FileCategory, Recommendation};
use crate::types::Algorithm;

fn default_config() -> Arc<CompressoConfig> {
    Arc::new(CompressoConfig::default())
}

/// Rejects inputs above the configured ceiling before any codec runs.
fn check_input_size(bytes: &[u8], config: &CompressoConfig) -> Result<(), CompressoError> {
    if bytes.len() > config.max_input_bytes {
        return Err(CompressoError::InputTooLarge {
            size: bytes.len(),
            limit: config.max_input_bytes,
        });
    }
    Ok(())
}

/// Compresses `bytes` with the algorithm named `algorithm` ("huffman", "rle", "lz77").
pub fn compress(bytes: &[u8], algorithm: &str) -> Result<CompressionResult, CompressoError> {
    compress_with_config(bytes, algorithm, default_config())
}

pub fn compress_with_config(
    bytes: &[u8],
    algorithm: &str,
    config: Arc<CompressoConfig>,
) -> Result<CompressionResult, CompressoError> {
    let algorithm: Algorithm = algorithm.parse()?;
    check_input_size(bytes, &config)?;
    pipeline::compress(bytes, algorithm, &config)
}

/// Decompresses a payload produced by `compress`.
///
/// `metadata_json` is the document from `metadata_json()`; Huffman cannot decode
/// without it. A payload flagged `fallback_to_original` is returned unchanged.
pub fn decompress(
    bytes: &[u8],
    algorithm: &str,
    metadata_json: Option<&str>,
) -> Result<Vec<u8>, CompressoError> {
    decompress_with_config(bytes, algorithm, metadata_json, default_config())
}

pub fn decompress_with_config(
    bytes: &[u8],
    algorithm: &str,
    metadata_json: Option<&str>,
    config: Arc<CompressoConfig>,
) -> Result<Vec<u8>, CompressoError> {
    let algorithm: Algorithm = algorithm.parse()?;
    check_input_size(bytes, &config)?;

    let transport: TransportMetadata = match metadata_json {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(json)?,
        _ => TransportMetadata::default(),
    };
    if transport.fallback_to_original {
        return Ok(bytes.to_vec());
    }

    let metadata = transport.into_codec_metadata(algorithm)?;
    pipeline::decompress(bytes, algorithm, &metadata)
}

/// Runs every algorithm and returns the best result with the full scoreboard.
pub fn smart_compress(bytes: &[u8]) -> Result<CompressionResult, CompressoError> {
    smart_compress_with_config(bytes, default_config())
}

pub fn smart_compress_with_config(
    bytes: &[u8],
    config: Arc<CompressoConfig>,
) -> Result<CompressionResult, CompressoError> {
    check_input_size(bytes, &config)?;
    pipeline::smart_compress(bytes, &config)
}

/// The registered algorithms and their descriptions.
pub fn list_algorithms() -> AlgorithmCatalog {
    AlgorithmCatalog::registered()
}

/// Serializes the part of `result` that `decompress` needs back.
pub fn metadata_json(result: &CompressionResult) -> Result<String, CompressoError> {
    Ok(serde_json::to_string(&TransportMetadata::from_result(result))?)
}

/// Suggests an algorithm from a file's name, MIME type and size, without
/// reading its contents.
pub fn recommend_algorithm(
    file_name: &str,
    mime_type: Option<&str>,
    size: usize,
) -> Recommendation {
    pipeline::recommend(FileCategory::detect(file_name, mime_type), size)
}
