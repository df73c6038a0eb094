//! Instruction Decode (ID) Phase.
//!
//! Runs the ISA decoder over the latched word. A reserved category/type
//! combination halts with ILLEGAL_OPCODE here, before any state is touched.

use crate::common::error::Halt;
use crate::core::control::Phase;
use crate::core::machine::Machine;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

/// Executes the instruction decode phase.
///
/// Stages the normalized record for the operand and execute phases. Decoding
/// does not read data memory; memory-indirect operands are fetched later so
/// that address faults are attributed to the operand phase.
pub fn decode_stage(machine: &mut Machine) -> Result<Phase, Halt> {
    let decoded = decode(machine.latch.word).ok_or_else(|| machine.illegal_opcode())?;

    if machine.trace {
        eprintln!("ID  pc={:04x} {}", machine.pc, disassemble(machine.latch.word));
    }

    machine.latch.decoded = Some(decoded);
    Ok(Phase::DetectLoop)
}
