//! General-Purpose Register File.
//!
//! This module implements the register file of the machine. It performs the following:
//! 1. **Storage:** Maintains 16 word-wide registers (`R0`-`R15`).
//! 2. **Initialization:** Every register starts at zero.
//! 3. **Debugging:** Provides a utility for dumping the complete register state.
//!
//! Register 0 is ordinary read/write storage; the conditional branches read
//! it as their comparand, but nothing is hardwired.

use crate::common::constants::NUM_REGISTERS;

/// General-purpose register file.
pub struct RegisterFile {
    regs: [u16; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    pub fn read(&self, idx: usize) -> u16 {
        self.regs[idx]
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The 16-bit value to write.
    pub fn write(&mut self, idx: usize, val: u16) {
        self.regs[idx] = val;
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Useful for debugging and tracing register state during simulation.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(4) {
            eprintln!(
                "R{:<2}={:#06x} R{:<2}={:#06x} R{:<2}={:#06x} R{:<2}={:#06x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
