//! This module defines the core, strongly-typed data representations used
//! throughout the compresso pipeline.
//!
//! It includes the canonical `Algorithm` enum, which replaces fragile
//! string-based dispatch, and the codec-specific `CodecMetadata` variant that
//! replaces an untyped metadata bag.

pub mod algorithm;
pub mod metadata;

// Re-export the main type(s) for easier access.
pub use algorithm::Algorithm;
pub use metadata::{CodecMetadata, HuffmanMetadata};
