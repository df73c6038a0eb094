//! Control Unit.
//!
//! The control unit walks a six-state machine once per instruction. Each
//! state names a phase handler; the handler either returns the next phase
//! or a [`Halt`], which is terminal. Keeping the phases distinct is what
//! lets a halt be attributed to the phase that raised it.

use crate::common::error::Halt;
use crate::core::machine::Machine;
use crate::core::phases::{
    decode::decode_stage, detect_loop::detect_loop_stage, execute::execute_stage,
    fetch::fetch_stage, operands::operand_stage, write_back::write_back_stage,
};

/// The six control-unit states, traversed cyclically per instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Read the instruction word at the PC into the latch.
    FetchInstr,
    /// Decode the latched word into a normalized record.
    DecodeInstr,
    /// Count the visit to this PC and test the loop threshold. Subsumes
    /// effective-address calculation: the EA is simply the value of the
    /// addressing register, so no arithmetic is needed here.
    DetectLoop,
    /// Resolve the right operand, fetching from data memory if indirect.
    FetchOperands,
    /// Apply the instruction's effect and advance the PC.
    ExecuteInstr,
    /// Close the cycle; effects were already committed in execute.
    WriteBack,
}

/// Runs a single phase handler and returns the next phase.
///
/// # Arguments
///
/// * `machine` - Machine state the handler operates on.
/// * `phase` - The phase to run.
///
/// # Errors
///
/// Returns the [`Halt`] raised by the handler; a halt is terminal and the
/// caller must not run further phases.
pub fn step_phase(machine: &mut Machine, phase: Phase) -> Result<Phase, Halt> {
    match phase {
        Phase::FetchInstr => fetch_stage(machine),
        Phase::DecodeInstr => decode_stage(machine),
        Phase::DetectLoop => detect_loop_stage(machine),
        Phase::FetchOperands => operand_stage(machine),
        Phase::ExecuteInstr => execute_stage(machine),
        Phase::WriteBack => write_back_stage(machine),
    }
}

/// Drives the state machine from instruction fetch until a phase halts.
///
/// There is no normal termination: execution that leaves the loaded code
/// image decodes the `0xFFFF` fill pattern and halts on an illegal opcode.
pub fn run_to_halt(machine: &mut Machine) -> Halt {
    let mut phase = Phase::FetchInstr;
    loop {
        match step_phase(machine, phase) {
            Ok(next) => phase = next,
            Err(halt) => return halt,
        }
    }
}
