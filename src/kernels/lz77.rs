//! This module contains the pure, stateless kernels for LZ77 sliding-window
//! compression of raw bytes.
//!
//! The on-wire format is a flat sequence of fixed 4-byte records:
//! `offset` (u16, big-endian), `length` (u8), `literal` (u8). A record with
//! `offset = 0, length = 0` is a pure literal. The 2-byte offset and 1-byte
//! length bound the window to 65535 and the lookahead to 255 (see `Lz77Config`).
//!
//! The matcher is the naive O(W * L) scan per position. It is only tractable
//! because the bridge caps input size; a hash-chain index could replace
//! `find_longest_match` without touching the format.

use crate::config::Lz77Config;
use crate::error::CompressoError;

/// Size in bytes of one encoded token.
pub const TOKEN_SIZE: usize = 4;

//==================================================================================
// 1. Token Model
//==================================================================================

/// An LZ77 token.
///
/// When a match is found the token is `(offset, length, literal)` where
/// `literal` is the byte following the match, or `None` if the match runs to
/// the end of the input. Otherwise `offset` and `length` are zero and `literal`
/// is the current byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub offset: u16,
    pub length: u8,
    pub literal: Option<u8>,
}

impl Token {
    pub fn literal(byte: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal: Some(byte),
        }
    }

    pub fn is_literal(&self) -> bool {
        self.length == 0
    }

    /// Writes the fixed 4-byte record.
    ///
    /// Every record carries a literal byte. A trailing match with no following
    /// byte is rewritten as a match one byte shorter whose literal is the last
    /// matched byte, which decodes to the same output.
    fn write_record(&self, output: &[u8], output_buf: &mut Vec<u8>) {
        let (offset, length, literal) = match self.literal {
            Some(byte) => (self.offset, self.length, byte),
            None => {
                let last = output.len() - 1;
                if self.length == 1 {
                    (0, 0, output[last])
                } else {
                    (self.offset, self.length - 1, output[last])
                }
            }
        };
        output_buf.extend_from_slice(&offset.to_be_bytes());
        output_buf.push(length);
        output_buf.push(literal);
    }

    fn read_record(record: &[u8]) -> Self {
        Self {
            offset: u16::from_be_bytes([record[0], record[1]]),
            length: record[2],
            literal: Some(record[3]),
        }
    }
}

//==================================================================================
// 2. Core Logic (The "Engine")
//==================================================================================

/// Searches the preceding `window_size` bytes for the longest match against
/// the bytes at `pos`. Returns `(offset, length)`, `(0, 0)` if nothing matches.
///
/// Candidates are scanned nearest-first and only a strictly longer match
/// replaces the current best, so ties resolve to the smallest offset.
fn find_longest_match(input: &[u8], pos: usize, config: &Lz77Config) -> (usize, usize) {
    let window_start = pos.saturating_sub(config.window_size);
    let max_len = config.lookahead_size.min(input.len() - pos);

    let mut best_offset = 0;
    let mut best_length = 0;

    for candidate in (window_start..pos).rev() {
        let mut length = 0;
        // The match may run past `pos`, copying bytes it is itself producing.
        while length < max_len && input[candidate + length] == input[pos + length] {
            length += 1;
        }
        if length > best_length {
            best_length = length;
            best_offset = pos - candidate;
            if best_length == max_len {
                break;
            }
        }
    }

    (best_offset, best_length)
}

/// Tokenizes `input` without serializing.
pub fn tokenize(input: &[u8], config: &Lz77Config) -> Result<Vec<Token>, CompressoError> {
    config.validate()?;

    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let (offset, length) = find_longest_match(input, pos, config);
        if length > 0 {
            let literal = input.get(pos + length).copied();
            tokens.push(Token {
                offset: offset as u16,
                length: length as u8,
                literal,
            });
            pos += length + 1;
        } else {
            tokens.push(Token::literal(input[pos]));
            pos += 1;
        }
    }

    Ok(tokens)
}

/// Replays tokens into `output_buf`, validating each back-reference.
pub fn replay(tokens: &[Token], output_buf: &mut Vec<u8>) -> Result<(), CompressoError> {
    output_buf.clear();

    for (idx, token) in tokens.iter().enumerate() {
        if token.length > 0 {
            let offset = token.offset as usize;
            if offset == 0 || offset > output_buf.len() {
                return Err(CompressoError::MalformedStream(format!(
                    "LZ77 token {} references offset {} with only {} bytes of history",
                    idx,
                    offset,
                    output_buf.len()
                )));
            }
            let start = output_buf.len() - offset;
            // Byte-by-byte: `offset` may be smaller than `length`.
            for i in 0..token.length as usize {
                let byte = output_buf[start + i];
                output_buf.push(byte);
            }
        } else if token.offset != 0 {
            return Err(CompressoError::MalformedStream(format!(
                "LZ77 literal token {} carries non-zero offset {}",
                idx, token.offset
            )));
        }

        if let Some(byte) = token.literal {
            output_buf.push(byte);
        }
    }

    Ok(())
}

//==================================================================================
// 3. Public API
//==================================================================================

/// The public-facing encode function for this module.
pub fn encode(
    input_bytes: &[u8],
    output_buf: &mut Vec<u8>,
    config: &Lz77Config,
) -> Result<(), CompressoError> {
    output_buf.clear();

    let tokens = tokenize(input_bytes, config)?;
    output_buf.reserve(tokens.len() * TOKEN_SIZE);
    for token in &tokens {
        token.write_record(input_bytes, output_buf);
    }

    Ok(())
}

/// The public-facing decode function for this module.
pub fn decode(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), CompressoError> {
    if input_bytes.len() % TOKEN_SIZE != 0 {
        return Err(CompressoError::MalformedStream(format!(
            "LZ77 stream length {} is not a multiple of {}",
            input_bytes.len(),
            TOKEN_SIZE
        )));
    }

    let tokens: Vec<Token> = input_bytes
        .chunks_exact(TOKEN_SIZE)
        .map(Token::read_record)
        .collect();
    replay(&tokens, output_buf)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
