//! Simulation support: loaders, memory dump, and the top-level simulator.

/// Hexdump-style data-memory printer.
pub mod dump;
/// Code and data image loaders.
pub mod loader;
/// Top-level simulator: owns the machine, runs it, reports the halt.
pub mod simulator;

pub use simulator::Simulator;
