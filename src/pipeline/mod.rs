//! The orchestration layer that sits between the bridge and the kernels.
//!
//! - `orchestrator`: run one named codec, measure it, apply the fallback policy.
//! - `planner`: smart compression, i.e. run every codec and keep the best.
//! - `advisor`: recommend a codec from a file's category and size alone.
//! - `artifact`: the result types all of the above hand back.

pub mod advisor;
pub mod artifact;
pub mod orchestrator;
pub mod planner;

pub use advisor::{recommend, FileCategory, Recommendation};
pub use artifact::{CompressionResult, CompressionStats, TestedAlgorithm};
pub use orchestrator::{compress, decompress};
pub use planner::smart_compress;

#[cfg(test)]
mod orchestrator_tests;
