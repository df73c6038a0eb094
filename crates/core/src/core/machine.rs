//! Architectural machine state.
//!
//! This module provides the `Machine` struct, the single owner of all state
//! mutated during execution: the register file, program counter, code and
//! data memories, the loop-detection visit map, and the staging latch. The
//! entire state has one lifecycle: initialized at startup, mutated by the
//! phase handlers, read once by the dumper at termination.

use std::collections::HashMap;

use crate::common::error::Halt;
use crate::config::Config;
use crate::core::arch::RegisterFile;
use crate::core::latch::StageLatch;
use crate::mem::{CodeMemory, DataMemory};
use crate::stats::SimStats;

/// Complete architectural state of the simulated machine.
pub struct Machine {
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Program counter, in code-word units.
    pub pc: u16,
    /// Instruction memory.
    pub code: CodeMemory,
    /// Data memory.
    pub data: DataMemory,
    /// Visit count per PC, maintained by the loop-detection phase.
    pub visits: HashMap<u16, u32>,
    /// Staging latch between the phases of the current cycle.
    pub latch: StageLatch,
    /// When set, the phase handlers print trace lines to stderr.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Machine {
    /// Creates a machine in its reset state: registers and PC zero, both
    /// memories filled with the fill pattern, visit map empty.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            code: CodeMemory::new(),
            data: DataMemory::new(),
            visits: HashMap::new(),
            latch: StageLatch::default(),
            trace: false,
            stats: SimStats::default(),
        }
    }

    /// Creates a machine configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut machine = Self::new();
        machine.trace = config.general.trace_instructions;
        machine
    }

    /// Builds an illegal-opcode halt for the current instruction.
    pub fn illegal_opcode(&self) -> Halt {
        Halt::IllegalOpcode {
            pc: self.pc,
            word: self.latch.word,
        }
    }

    /// Builds an infinite-loop halt for the current instruction.
    pub fn infinite_loop(&self) -> Halt {
        Halt::InfiniteLoop {
            pc: self.pc,
            word: self.latch.word,
        }
    }

    /// Builds an illegal-address halt for an access to `addr` by the
    /// current instruction.
    pub fn illegal_address(&self, addr: u16) -> Halt {
        Halt::IllegalAddress {
            addr,
            pc: self.pc,
            word: self.latch.word,
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
