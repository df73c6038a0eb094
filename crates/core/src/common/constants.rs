//! Global Machine Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Geometry:** Word size, memory extents, and register-file size.
//! 2. **Instruction Constants:** Field shifts and masks for instruction decoding.
//! 3. **Simulation Constants:** The infinite-loop detection threshold.
//! 4. **Dump Constants:** Line width and printable range for the memory dump.

/// Size of one machine word in bytes.
pub const WORD_BYTES: usize = 2;

/// Number of instruction words in code memory.
pub const CODE_WORDS: usize = 1024;

/// Total size of code memory in bytes.
pub const CODE_BYTES: usize = CODE_WORDS * WORD_BYTES;

/// Number of data words in data memory.
pub const DATA_WORDS: usize = 1024;

/// Total size of data memory in bytes.
pub const DATA_BYTES: usize = DATA_WORDS * WORD_BYTES;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 16;

/// Register compared against by the conditional branches.
///
/// Register 0 is ordinary storage in every other respect; the branch
/// predicates read it as their right-hand comparand by convention.
pub const COMPARAND_REGISTER: usize = 0;

/// Fill byte for uninitialized code and data memory.
///
/// A word of two fill bytes (`0xFFFF`) decodes as an illegal opcode, so
/// execution that runs past the loaded image halts at the first fill word.
pub const MEMORY_FILL: u8 = 0xFF;

/// Number of visits to a single PC before the control unit suspects an
/// infinite loop and halts.
pub const INFINITE_LOOP_THRESHOLD: u32 = 1_024_000;

/// Bit position shift for the 3-bit category field.
pub const CATEGORY_SHIFT: u16 = 13;

/// Bit mask for the category field after shifting.
pub const CATEGORY_MASK: u16 = 0b111;

/// Bit position shift for the 3-bit type field.
pub const TYPE_SHIFT: u16 = 10;

/// Bit mask for the type field after shifting.
pub const TYPE_MASK: u16 = 0b111;

/// Bit position shift for the 4-bit left-register field.
pub const LEFT_REG_SHIFT: u16 = 6;

/// Bit mask for the left-register field after shifting.
pub const LEFT_REG_MASK: u16 = 0b1111;

/// Bit mask for the 6-bit right field (immediate or register sub-field).
pub const RIGHT_FIELD_MASK: u16 = 0b11_1111;

/// Bit position shift for the register index inside the right field.
pub const RIGHT_REG_SHIFT: u16 = 2;

/// Bit mask for the register index inside the right field.
pub const RIGHT_REG_MASK: u16 = 0b1111;

/// Width in bits of the signed immediate form of the right field.
pub const IMMEDIATE_BITS: u32 = 6;

/// Number of bytes rendered per memory-dump line.
pub const DUMP_LINE_BYTES: usize = 16;

/// Lowest byte value rendered as itself in the dump text gutter.
pub const PRINTABLE_ASCII_MIN: u8 = 0x21;

/// Highest byte value rendered as itself in the dump text gutter.
pub const PRINTABLE_ASCII_MAX: u8 = 0x7E;
