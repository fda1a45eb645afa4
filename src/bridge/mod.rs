// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the compresso library. It speaks
// the transport layer's language (algorithm names as strings, metadata as JSON)
// and translates it into the strongly-typed `pipeline` engine. Nothing below
// this layer ever sees a string algorithm name or an untyped metadata document.
//
// Data Flow (Compression):
//
//   1. [Stateless API (compress / smart_compress)] -> Receives `&[u8]` + name
//         |
//         `-> a. Parses the name into `Algorithm` (`UnsupportedAlgorithm` otherwise)
//         |
//         `-> b. Enforces `max_input_bytes` (`InputTooLarge`)
//
//   2. [Pipeline Engine (orchestrator / planner)] -> Returns `CompressionResult`
//
//   3. [Stateless API (metadata_json)] -> Extracts the JSON document the caller
//      must hand back to `decompress`
//
//
// Data Flow (Decompression):
//
//   1. [Stateless API (decompress)] -> Receives `&[u8]` + name + metadata JSON
//         |
//         `-> Parses `TransportMetadata` and converts it into `CodecMetadata`
//
//   2. [Pipeline Engine (orchestrator)] -> Returns the original bytes
//
// ====================================================================================
pub mod format;
pub mod stateless_api;

// --- Stateless API (for the transport layer and testing) ---
pub use stateless_api::{
    compress, compress_with_config, decompress, decompress_with_config, list_algorithms,
    metadata_json, recommend_algorithm, smart_compress, smart_compress_with_config,
};

// --- Transport Structs ---
pub use format::{AlgorithmCatalog, TransportMetadata};
