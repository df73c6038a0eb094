//! Phase handlers.
//!
//! One module per control-unit phase. Each handler takes the machine,
//! performs its slice of the instruction cycle, and returns the next phase
//! or a terminal halt.

/// Instruction decode.
pub mod decode;
/// Loop detection (and effective-address calculation).
pub mod detect_loop;
/// Instruction execution and PC update.
pub mod execute;
/// Instruction fetch.
pub mod fetch;
/// Right-operand resolution.
pub mod operands;
/// Cycle close-out.
pub mod write_back;
