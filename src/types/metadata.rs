//! Codec-specific side-channel data produced by `compress` and required by
//! `decompress`.

use serde::{Deserialize, Serialize};

use crate::kernels::huffman::HuffmanTreeNode;

/// What the Huffman decoder needs besides the packed bits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HuffmanMetadata {
    /// `None` only for an empty input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<HuffmanTreeNode>,
    /// Decoding stops after exactly this many bytes.
    pub original_size: usize,
}

/// Metadata carried alongside a compression result.
///
/// RLE and LZ77 payloads are self-contained, so they carry `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CodecMetadata {
    #[default]
    None,
    Huffman(HuffmanMetadata),
}

impl CodecMetadata {
    pub fn huffman_tree(&self) -> Option<&HuffmanTreeNode> {
        match self {
            CodecMetadata::Huffman(meta) => meta.tree.as_ref(),
            CodecMetadata::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_json_shape() {
        let none = serde_json::to_string(&CodecMetadata::None).unwrap();
        assert_eq!(none, r#"{"kind":"none"}"#);

        let huffman = CodecMetadata::Huffman(HuffmanMetadata {
            tree: Some(HuffmanTreeNode {
                value: Some(b'x'),
                frequency: 4,
                left: None,
                right: None,
            }),
            original_size: 4,
        });
        let json = serde_json::to_string(&huffman).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"huffman","tree":{"value":120,"frequency":4},"original_size":4}"#
        );
        let parsed: CodecMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, huffman);
        assert_eq!(parsed.huffman_tree().and_then(|t| t.value), Some(b'x'));
    }
}
