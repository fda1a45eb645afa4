// In: src/bridge/format.rs

//! Defines the structures exchanged with the transport layer.
//! This is the single source of truth for the shape of the algorithm catalog
//! and of the metadata document a caller hands back to `decompress`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CompressoError;
use crate::kernels::huffman::HuffmanTreeNode;
use crate::pipeline::CompressionResult;
use crate::types::{Algorithm, CodecMetadata, HuffmanMetadata};

//==================================================================================
// I. Algorithm Catalog
//==================================================================================

/// The static list of registered algorithms and their descriptions.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmCatalog {
    pub names: Vec<&'static str>,
    pub descriptions: BTreeMap<&'static str, &'static str>,
}

impl AlgorithmCatalog {
    pub(crate) fn registered() -> Self {
        Self {
            names: Algorithm::ALL.iter().map(Algorithm::name).collect(),
            descriptions: Algorithm::ALL
                .iter()
                .map(|a| (a.name(), a.description()))
                .collect(),
        }
    }
}

//==================================================================================
// II. Transport Metadata
//==================================================================================

/// The metadata document that travels next to a compressed payload.
///
/// Field names accept both `snake_case` and the `camelCase` spelling used by
/// web clients. Unknown fields (timings, UI hints) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TransportMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<HuffmanTreeNode>,

    #[serde(default, alias = "originalSize", skip_serializing_if = "Option::is_none")]
    pub original_size: Option<usize>,

    /// Set when the payload is the untouched input.
    #[serde(default, alias = "fallbackToOriginal")]
    pub fallback_to_original: bool,
}

impl TransportMetadata {
    /// Captures what a later `decompress` call needs from `result`.
    pub fn from_result(result: &CompressionResult) -> Self {
        let fallback_to_original = result.stats.fallback_to_original;
        match &result.metadata {
            CodecMetadata::Huffman(meta) => Self {
                tree: meta.tree.clone(),
                original_size: Some(meta.original_size),
                fallback_to_original,
            },
            CodecMetadata::None => Self {
                tree: None,
                original_size: None,
                fallback_to_original,
            },
        }
    }

    /// Converts the loose transport document into the codec metadata
    /// `algorithm` expects.
    pub fn into_codec_metadata(self, algorithm: Algorithm) -> Result<CodecMetadata, CompressoError> {
        match algorithm {
            Algorithm::Huffman => {
                let original_size = self.original_size.ok_or_else(|| {
                    CompressoError::MissingMetadata(
                        "Huffman decompression requires the original size".to_string(),
                    )
                })?;
                if self.tree.is_none() && original_size > 0 {
                    return Err(CompressoError::MissingMetadata(
                        "Huffman decompression requires tree metadata".to_string(),
                    ));
                }
                Ok(CodecMetadata::Huffman(HuffmanMetadata {
                    tree: self.tree,
                    original_size,
                }))
            }
            Algorithm::Rle | Algorithm::Lz77 => Ok(CodecMetadata::None),
        }
    }
}
