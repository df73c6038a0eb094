//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. The CLI constructs `Config::default()` and applies flag overrides;
//! the structures are serde-deserializable so embedders can supply JSON.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Whether phase trace lines are printed to stderr.
    pub const TRACE_INSTRUCTIONS: bool = false;

    /// Whether execution statistics are printed after the memory dump.
    pub const PRINT_STATS: bool = false;
}

/// Root configuration type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run options.
    pub general: GeneralConfig,
}

/// General run options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Print per-phase trace lines (fetch, decode, execute) to stderr.
    pub trace_instructions: bool,
    /// Print execution statistics after the memory dump.
    pub print_stats: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            print_stats: defaults::PRINT_STATS,
        }
    }
}
