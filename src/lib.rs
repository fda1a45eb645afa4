//! This file is the root of the `compresso` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`pipeline`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types a transport layer needs, so callers can
//!     write `compresso::compress(..)` without knowing the module layout.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod types;
pub mod utils;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{
    compress, decompress, list_algorithms, metadata_json, recommend_algorithm, smart_compress,
    AlgorithmCatalog,
};
pub use config::{CompressoConfig, Lz77Config};
pub use error::CompressoError;
pub use observability::enable_verbose_logging;
pub use pipeline::{CompressionResult, CompressionStats, TestedAlgorithm};
pub use types::{Algorithm, CodecMetadata};
