//! This module contains the pure, stateless, and performant kernels for performing
//! Run-Length Encoding (RLE) and decoding on raw bytes.
//!
//! It is highly effective for data with long, contiguous runs of identical bytes.
//! The format is a flat sequence of fixed 2-byte `(value, run_length)` records.
//! Because the run length lives in a single byte, runs longer than 255 are split
//! across several records. This module is panic-free.

use crate::error::CompressoError;

/// Size in bytes of one `(value, run_length)` record.
pub const RECORD_SIZE: usize = 2;
/// The longest run a single record can describe.
pub const MAX_RUN: usize = u8::MAX as usize;

//==================================================================================
// 1. Public API
//==================================================================================

/// The public-facing encode function for this module.
pub fn encode(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), CompressoError> {
    output_buf.clear();

    if input_bytes.is_empty() {
        return Ok(());
    }

    let mut current_val = input_bytes[0];
    let mut run_count: usize = 1;

    for &val in &input_bytes[1..] {
        if val == current_val && run_count < MAX_RUN {
            run_count += 1;
        } else {
            output_buf.push(current_val);
            output_buf.push(run_count as u8);
            current_val = val;
            run_count = 1;
        }
    }

    output_buf.push(current_val);
    output_buf.push(run_count as u8);

    Ok(())
}

/// The public-facing decode function for this module.
pub fn decode(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), CompressoError> {
    output_buf.clear();

    if input_bytes.len() % RECORD_SIZE != 0 {
        return Err(CompressoError::MalformedStream(format!(
            "RLE stream length {} is not a multiple of {}",
            input_bytes.len(),
            RECORD_SIZE
        )));
    }

    let total: usize = input_bytes
        .chunks_exact(RECORD_SIZE)
        .map(|record| record[1] as usize)
        .sum();
    output_buf.reserve(total);

    for (idx, record) in input_bytes.chunks_exact(RECORD_SIZE).enumerate() {
        let (value, run_length) = (record[0], record[1]);
        if run_length == 0 {
            return Err(CompressoError::MalformedStream(format!(
                "RLE record {} has a zero run length",
                idx
            )));
        }
        output_buf.resize(output_buf.len() + run_length as usize, value);
    }

    Ok(())
}

/// Number of `(value, run_length)` records in an encoded stream.
pub fn token_count(encoded: &[u8]) -> usize {
    encoded.len() / RECORD_SIZE
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
