//! Operand Fetch Phase.
//!
//! Resolves the decoded right operand to a 16-bit value:
//! 1. **Immediate:** sign-extended from its 6-bit field. This is the only
//!    form that is sign-extended; register and memory operands are full
//!    16-bit values.
//! 2. **Register:** read directly from the register file.
//! 3. **Memory-indirect:** the addressing register's value is bounds-checked
//!    and the big-endian data word is fetched; an out-of-range address
//!    halts with ILLEGAL_ADDRESS.

use crate::common::constants::IMMEDIATE_BITS;
use crate::common::data::sign_extend;
use crate::common::error::Halt;
use crate::core::control::Phase;
use crate::core::machine::Machine;
use crate::isa::instruction::RightOperand;

/// Executes the operand-fetch phase.
pub fn operand_stage(machine: &mut Machine) -> Result<Phase, Halt> {
    let Some(decoded) = machine.latch.decoded else {
        return Err(machine.illegal_opcode());
    };

    machine.latch.operand = match decoded.rhs {
        RightOperand::Immediate(raw) => sign_extend(u16::from(raw), IMMEDIATE_BITS),
        RightOperand::Register(idx) => machine.regs.read(idx),
        RightOperand::Memory(idx) => {
            let addr = machine.regs.read(idx);
            let value = machine
                .data
                .read_word(addr)
                .ok_or_else(|| machine.illegal_address(addr))?;
            machine.stats.memory_reads += 1;
            value
        }
    };

    Ok(Phase::ExecuteInstr)
}
