//! Write-Back (WB) Phase.
//!
//! Register and memory effects commit in the execute phase; this state only
//! closes the cycle and hands control back to instruction fetch.

use crate::common::error::Halt;
use crate::core::control::Phase;
use crate::core::machine::Machine;

/// Executes the write-back phase.
pub fn write_back_stage(machine: &mut Machine) -> Result<Phase, Halt> {
    if machine.trace {
        eprintln!("WB  pc={:04x}", machine.pc);
    }
    Ok(Phase::FetchInstr)
}
