// In: src/config.rs

//! The single source of truth for all compresso configuration.
//!
//! `CompressoConfig` is created once at the application boundary (e.g., from a
//! JSON document handed over by the transport layer) and then passed down
//! through the system as a shared, read-only `Arc<CompressoConfig>`.
//!
//! Nothing in here is mutable shared state: the orchestrator and planner only
//! ever read from it.

use serde::{Deserialize, Serialize};

use crate::error::CompressoError;

//==================================================================================
// I. Codec Configuration
//==================================================================================

/// The largest window an LZ77 token can address (2-byte offset field).
pub const MAX_LZ77_WINDOW: usize = u16::MAX as usize;
/// The longest match an LZ77 token can describe (1-byte length field).
pub const MAX_LZ77_LOOKAHEAD: usize = u8::MAX as usize;

/// Sliding-window parameters for the LZ77 codec.
///
/// These are fixed per deployment, never per call: a caller cannot tune them
/// through `compress`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Lz77Config {
    /// How far back (in bytes) a back-reference may point.
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// The maximum match length considered at each position.
    #[serde(default = "default_lookahead_size")]
    pub lookahead_size: usize,
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            lookahead_size: default_lookahead_size(),
        }
    }
}

impl Lz77Config {
    pub fn validate(&self) -> Result<(), CompressoError> {
        if self.window_size == 0 || self.window_size > MAX_LZ77_WINDOW {
            return Err(CompressoError::InvalidConfig(format!(
                "lz77.window_size must be in 1..={}, got {}",
                MAX_LZ77_WINDOW, self.window_size
            )));
        }
        if self.lookahead_size == 0 || self.lookahead_size > MAX_LZ77_LOOKAHEAD {
            return Err(CompressoError::InvalidConfig(format!(
                "lz77.lookahead_size must be in 1..={}, got {}",
                MAX_LZ77_LOOKAHEAD, self.lookahead_size
            )));
        }
        Ok(())
    }
}

fn default_window_size() -> usize {
    4096
}

fn default_lookahead_size() -> usize {
    MAX_LZ77_LOOKAHEAD
}

//==================================================================================
// II. The Unified CompressoConfig
//==================================================================================

/// The single, unified configuration for the compresso core.
/// This struct is created once and shared throughout the system via an `Arc`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CompressoConfig {
    /// Window and lookahead sizes for the LZ77 codec.
    #[serde(default)]
    pub lz77: Lz77Config,

    /// The input-size ceiling enforced by the bridge before any codec runs.
    /// The naive LZ77 matcher is O(n * W), so this is what keeps latency bounded.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// If true, smart compression runs its per-algorithm trials on the rayon pool.
    #[serde(default = "default_true")]
    pub parallel_trials: bool,
}

impl Default for CompressoConfig {
    fn default() -> Self {
        Self {
            lz77: Lz77Config::default(),
            max_input_bytes: default_max_input_bytes(),
            parallel_trials: true,
        }
    }
}

impl CompressoConfig {
    /// Parses a JSON document into a validated config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CompressoError> {
        let config: CompressoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CompressoError> {
        self.lz77.validate()?;
        if self.max_input_bytes == 0 {
            return Err(CompressoError::InvalidConfig(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

/// 50 MiB, the upload limit of the surrounding service.
fn default_max_input_bytes() -> usize {
    50 * 1024 * 1024
}
