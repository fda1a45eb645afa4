//! This module contains the pure, stateless kernels for Huffman coding of raw bytes.
//!
//! The tree is built fresh for every call and shipped alongside the payload as
//! metadata, so the decoder never recomputes it. Internally the tree is an arena
//! of nodes addressed by index; on the wire it becomes the plain recursive record
//! `{value?, frequency, left?, right?}` (`HuffmanTreeNode`).
//!
//! Bits are packed MSB-first and the final byte is zero-padded. Because padding
//! bits can trace a valid path to a leaf, decoding is bounded by the original
//! length rather than by the number of available bits.

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::CompressoError;

/// Byte value -> occurrence count over the whole input.
pub type FrequencyTable = [u64; 256];

//==================================================================================
// 1. Tree Representation
//==================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Leaf { value: u8, freq: u64 },
    Internal { freq: u64, left: usize, right: usize },
}

impl Node {
    fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }
}

/// An owned Huffman tree stored as an index arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

/// The serialized, self-describing form of a Huffman tree node.
///
/// A leaf carries `value`; an internal node carries both children. `frequency`
/// is informational and is not needed to decode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u8>,
    pub frequency: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<HuffmanTreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<HuffmanTreeNode>>,
}

/// Byte value -> prefix-free code.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<BitVec<u8, Msb0>>,
}

impl CodeTable {
    /// Returns the code for `byte`, or `None` if the byte never occurred.
    pub fn get(&self, byte: u8) -> Option<&BitSlice<u8, Msb0>> {
        let code = &self.codes[byte as usize];
        if code.is_empty() {
            None
        } else {
            Some(code.as_bitslice())
        }
    }
}

/// Counts every byte value in `input`.
pub fn build_frequency_table(input: &[u8]) -> FrequencyTable {
    let mut freqs = [0u64; 256];
    for &byte in input {
        freqs[byte as usize] += 1;
    }
    freqs
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lowest-frequency nodes.
    /// Returns `None` if the table is empty.
    ///
    /// Ties go to the node created first: leaves in ascending byte order, then
    /// merged nodes in merge order.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Option<Self> {
        let mut nodes = Vec::new();
        let mut heap = BinaryHeap::new();

        for (value, &freq) in freqs.iter().enumerate() {
            if freq > 0 {
                heap.push(Reverse((freq, nodes.len())));
                nodes.push(Node::Leaf {
                    value: value as u8,
                    freq,
                });
            }
        }

        while heap.len() > 1 {
            let Reverse((left_freq, left)) = heap.pop()?;
            let Reverse((right_freq, right)) = heap.pop()?;
            let freq = left_freq + right_freq;
            heap.push(Reverse((freq, nodes.len())));
            nodes.push(Node::Internal { freq, left, right });
        }

        let Reverse((_, root)) = heap.pop()?;
        Some(Self { nodes, root })
    }

    /// Derives the code table by a depth-first walk, `0` for left and `1` for right.
    /// A single-leaf tree gets the 1-bit code `0`.
    pub fn code_table(&self) -> CodeTable {
        let mut codes: Vec<BitVec<u8, Msb0>> = vec![BitVec::new(); 256];
        let mut stack = vec![(self.root, BitVec::<u8, Msb0>::new())];

        while let Some((idx, prefix)) = stack.pop() {
            match self.nodes[idx] {
                Node::Leaf { value, .. } => {
                    codes[value as usize] = if prefix.is_empty() {
                        bitvec![u8, Msb0; 0]
                    } else {
                        prefix
                    };
                }
                Node::Internal { left, right, .. } => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push(true);
                    stack.push((right, right_prefix));

                    let mut left_prefix = prefix;
                    left_prefix.push(false);
                    stack.push((left, left_prefix));
                }
            }
        }

        CodeTable { codes }
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }

    /// Frequency of the root, i.e. the length of the input the tree was built from.
    pub fn total_frequency(&self) -> u64 {
        self.nodes[self.root].freq()
    }

    /// Converts the arena into its recursive wire form.
    pub fn to_serialized(&self) -> HuffmanTreeNode {
        self.serialize_node(self.root)
    }

    fn serialize_node(&self, idx: usize) -> HuffmanTreeNode {
        match self.nodes[idx] {
            Node::Leaf { value, freq } => HuffmanTreeNode {
                value: Some(value),
                frequency: freq,
                left: None,
                right: None,
            },
            Node::Internal { freq, left, right } => HuffmanTreeNode {
                value: None,
                frequency: freq,
                left: Some(Box::new(self.serialize_node(left))),
                right: Some(Box::new(self.serialize_node(right))),
            },
        }
    }

    /// Rebuilds the arena from its wire form, rejecting nodes that are neither a
    /// proper leaf nor a proper internal node.
    pub fn from_serialized(root: &HuffmanTreeNode) -> Result<Self, CompressoError> {
        let mut nodes = Vec::new();
        let root = Self::push_serialized(root, &mut nodes)?;
        Ok(Self { nodes, root })
    }

    fn push_serialized(
        node: &HuffmanTreeNode,
        nodes: &mut Vec<Node>,
    ) -> Result<usize, CompressoError> {
        let arena_node = match (node.value, &node.left, &node.right) {
            (Some(value), None, None) => Node::Leaf {
                value,
                freq: node.frequency,
            },
            (None, Some(left), Some(right)) => {
                let left = Self::push_serialized(left, nodes)?;
                let right = Self::push_serialized(right, nodes)?;
                Node::Internal {
                    freq: node.frequency,
                    left,
                    right,
                }
            }
            (Some(_), _, _) => {
                return Err(CompressoError::MalformedStream(
                    "Huffman leaf node must not have children".to_string(),
                ))
            }
            (None, _, _) => {
                return Err(CompressoError::MalformedStream(
                    "Huffman internal node must have both children".to_string(),
                ))
            }
        };
        nodes.push(arena_node);
        Ok(nodes.len() - 1)
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Huffman-encodes `input_bytes` into `output_buf` and returns the serialized tree.
///
/// Empty input produces an empty payload and no tree.
pub fn encode(
    input_bytes: &[u8],
    output_buf: &mut Vec<u8>,
) -> Result<Option<HuffmanTreeNode>, CompressoError> {
    output_buf.clear();

    let freqs = build_frequency_table(input_bytes);
    let tree = match HuffmanTree::from_frequencies(&freqs) {
        Some(tree) => tree,
        None => return Ok(None),
    };
    let codes = tree.code_table();

    let total_bits: usize = freqs
        .iter()
        .enumerate()
        .map(|(byte, &freq)| freq as usize * codes.codes[byte].len())
        .sum();
    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(total_bits);

    for &byte in input_bytes {
        let code = codes.get(byte).ok_or_else(|| {
            CompressoError::InternalError(format!("No Huffman code for byte {}", byte))
        })?;
        bits.extend_from_bitslice(code);
    }

    // Zero-pad up to the next byte boundary.
    let padded_len = bits.len().div_ceil(8) * 8;
    bits.resize(padded_len, false);
    output_buf.extend_from_slice(bits.as_raw_slice());

    Ok(Some(tree.to_serialized()))
}

/// Decodes exactly `original_size` bytes from `input_bytes` using `tree`.
pub fn decode(
    input_bytes: &[u8],
    tree: Option<&HuffmanTreeNode>,
    original_size: usize,
    output_buf: &mut Vec<u8>,
) -> Result<(), CompressoError> {
    output_buf.clear();

    if original_size == 0 {
        return Ok(());
    }

    let tree = tree.ok_or_else(|| {
        CompressoError::MissingMetadata("Huffman decompression requires tree metadata".to_string())
    })?;
    let tree = HuffmanTree::from_serialized(tree)?;

    let bits = input_bytes.view_bits::<Msb0>();
    // Every emitted byte consumes at least one bit.
    if original_size > bits.len() {
        return Err(CompressoError::MalformedStream(format!(
            "Huffman payload holds {} bits, cannot decode {} bytes",
            bits.len(),
            original_size
        )));
    }
    output_buf.reserve(original_size);

    if let Node::Leaf { value, .. } = tree.nodes[tree.root] {
        output_buf.resize(original_size, value);
        return Ok(());
    }

    let mut current = tree.root;
    for bit in bits.iter().by_vals() {
        current = match tree.nodes[current] {
            Node::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            Node::Leaf { .. } => {
                return Err(CompressoError::InternalError(
                    "Huffman walk resumed from a leaf".to_string(),
                ))
            }
        };

        if let Node::Leaf { value, .. } = tree.nodes[current] {
            output_buf.push(value);
            if output_buf.len() == original_size {
                return Ok(());
            }
            current = tree.root;
        }
    }

    Err(CompressoError::MalformedStream(format!(
        "Huffman payload exhausted after {} of {} bytes",
        output_buf.len(),
        original_size
    )))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
