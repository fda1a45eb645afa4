// In: src/error.rs

//! This module defines the single, unified error type for the entire compresso library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressoError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The caller named an algorithm that is not registered.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A codec that needs side-channel metadata (Huffman) was called without it.
    #[error("Missing metadata: {0}")]
    MissingMetadata(String),

    /// Token/byte alignment violation or a corrupt payload.
    #[error("Malformed stream: {0}")]
    MalformedStream(String),

    #[error("Input of {size} bytes exceeds the configured limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// Smart compression could not produce a single successful trial.
    #[error("No compression algorithm succeeded: {0}")]
    NoCodecSucceeded(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, typically during metadata or config parsing.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (e.g., opening a log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CompressoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_are_forwardable() {
        let err = CompressoError::UnsupportedAlgorithm("zip".to_string());
        assert_eq!(err.to_string(), "Unsupported algorithm: zip");

        let err = CompressoError::InputTooLarge { size: 10, limit: 5 };
        assert!(err.to_string().contains("10 bytes"));
    }

    #[test]
    fn test_serde_error_converts_via_from() {
        fn parse(s: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(s)?)
        }
        assert!(matches!(parse("{"), Err(CompressoError::SerdeJson(_))));
    }
}
