//! Execution statistics collection and reporting.
//!
//! This module tracks counters for the simulator. It provides:
//! 1. **Instruction mix:** Retired counts by category (ALU, move, shift, branch).
//! 2. **Branches:** Taken and not-taken counts.
//! 3. **Memory traffic:** Data-memory word reads and writes.

/// Execution statistics accumulated by the phase handlers.
#[derive(Clone, Default)]
pub struct SimStats {
    /// Number of instructions that completed their execute phase.
    pub instructions_retired: u64,

    /// Count of arithmetic/logical instructions retired.
    pub inst_alu: u64,
    /// Count of MOVE instructions retired.
    pub inst_move: u64,
    /// Count of SHIFT instructions retired.
    pub inst_shift: u64,
    /// Count of BRANCH instructions retired.
    pub inst_branch: u64,

    /// Number of branches that assigned the PC.
    pub branches_taken: u64,
    /// Number of conditional branches that fell through.
    pub branches_untaken: u64,

    /// Data-memory word reads performed by the operand phase.
    pub memory_reads: u64,
    /// Data-memory word writes performed by the execute phase.
    pub memory_writes: u64,
}

impl SimStats {
    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("=== Execution Statistics ===");
        println!("Instructions retired: {}", self.instructions_retired);
        println!(
            "  ALU: {}  MOVE: {}  SHIFT: {}  BRANCH: {}",
            self.inst_alu, self.inst_move, self.inst_shift, self.inst_branch
        );
        println!(
            "Branches taken: {}  not taken: {}",
            self.branches_taken, self.branches_untaken
        );
        println!(
            "Data memory reads: {}  writes: {}",
            self.memory_reads, self.memory_writes
        );
    }
}
