//! 16-bit register-machine instruction-set simulator library.
//!
//! This crate implements the rm16 processor model with the following:
//! 1. **Core:** Six-phase control unit, register file, and per-instruction staging latch.
//! 2. **Memory:** Big-endian word-addressed code and data memories (1024 words each).
//! 3. **ISA:** Field extraction, decoding, and disassembly for the eight instruction categories.
//! 4. **Simulation:** Image loaders, halt reporting, memory dump, and statistics collection.
//!
//! Execution has no normal termination: a program runs until it raises one of
//! the three halt reasons (illegal opcode, suspected infinite loop, illegal
//! address), at which point the driver reports the halt and dumps data memory.

/// Common types, constants, and word-level helpers.
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Machine core (register file, machine state, control unit, phase handlers).
pub mod core;
/// Instruction set (field layout, decode, opcode tables, disassembly).
pub mod isa;
/// Code and data memories.
pub mod mem;
/// Image loaders, halt reporting, and the data-memory dump.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Terminal halt reasons raised by the phase handlers.
pub use crate::common::error::Halt;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural machine state; holds registers, PC, memories, and the visit map.
pub use crate::core::machine::Machine;
/// Top-level simulator; owns a `Machine`, runs it to a halt, and reports.
pub use crate::sim::simulator::Simulator;
