//! Instruction set definitions.
//!
//! Field layout, opcode tables, decoding, and disassembly for the eight
//! instruction categories.

/// Decoding of raw instruction words into normalized records.
pub mod decode;
/// Mnemonic rendering for trace output and test diagnostics.
pub mod disasm;
/// Field extraction and the decoded-instruction record.
pub mod instruction;
/// Category and type constant tables.
pub mod opcodes;
