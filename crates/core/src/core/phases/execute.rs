//! Execute (EX) Phase.
//!
//! Applies the decoded operation to the architectural state:
//! 1. **Arithmetic/logical:** `left <- left op right` with 16-bit wraparound.
//! 2. **MOVE:** register or data-memory destination; stores are
//!    bounds-checked against data memory.
//! 3. **SHIFT:** one-bit logical shift of the left register.
//! 4. **BRANCH:** signed comparison of the left register against register 0;
//!    a taken branch (JR included) assigns the PC and skips the
//!    post-increment, everything else falls through to `PC + 1`.

use crate::common::constants::COMPARAND_REGISTER;
use crate::common::error::Halt;
use crate::core::control::Phase;
use crate::core::machine::Machine;
use crate::isa::opcodes::{branch_type, category, move_type, shift_type};

/// Executes the decoded instruction and advances the PC.
pub fn execute_stage(machine: &mut Machine) -> Result<Phase, Halt> {
    let Some(decoded) = machine.latch.decoded else {
        return Err(machine.illegal_opcode());
    };
    let rhs = machine.latch.operand;
    let dst = decoded.dst;
    let mut jumped = false;

    match decoded.category {
        category::ADD => {
            let value = machine.regs.read(dst).wrapping_add(rhs);
            machine.regs.write(dst, value);
            machine.stats.inst_alu += 1;
        }
        category::SUB => {
            let value = machine.regs.read(dst).wrapping_sub(rhs);
            machine.regs.write(dst, value);
            machine.stats.inst_alu += 1;
        }
        category::AND => {
            let value = machine.regs.read(dst) & rhs;
            machine.regs.write(dst, value);
            machine.stats.inst_alu += 1;
        }
        category::OR => {
            let value = machine.regs.read(dst) | rhs;
            machine.regs.write(dst, value);
            machine.stats.inst_alu += 1;
        }
        category::XOR => {
            let value = machine.regs.read(dst) ^ rhs;
            machine.regs.write(dst, value);
            machine.stats.inst_alu += 1;
        }
        category::MOVE => {
            match decoded.op_type {
                move_type::IMM_TO_REG | move_type::MEM_TO_REG => {
                    machine.regs.write(dst, rhs);
                }
                move_type::IMM_TO_MEM | move_type::REG_TO_MEM => {
                    // The left register holds the destination address.
                    let addr = machine.regs.read(dst);
                    machine
                        .data
                        .write_word(addr, rhs)
                        .ok_or_else(|| machine.illegal_address(addr))?;
                    machine.stats.memory_writes += 1;
                }
                _ => return Err(machine.illegal_opcode()),
            }
            machine.stats.inst_move += 1;
        }
        category::SHIFT => {
            match decoded.op_type {
                shift_type::RIGHT => {
                    let value = machine.regs.read(dst) >> 1;
                    machine.regs.write(dst, value);
                }
                shift_type::LEFT => {
                    let value = machine.regs.read(dst) << 1;
                    machine.regs.write(dst, value);
                }
                _ => return Err(machine.illegal_opcode()),
            }
            machine.stats.inst_shift += 1;
        }
        category::BRANCH => {
            let lhs = machine.regs.read(dst) as i16;
            let comparand = machine.regs.read(COMPARAND_REGISTER) as i16;

            let taken = match decoded.op_type {
                branch_type::JR => true,
                branch_type::BEQ => lhs == comparand,
                branch_type::BNE => lhs != comparand,
                branch_type::BLT => lhs < comparand,
                branch_type::BGT => lhs > comparand,
                branch_type::BLE => lhs <= comparand,
                branch_type::BGE => lhs >= comparand,
                _ => return Err(machine.illegal_opcode()),
            };

            if taken {
                if decoded.op_type == branch_type::JR {
                    machine.pc = machine.regs.read(dst);
                } else {
                    machine.pc = machine.pc.wrapping_add(rhs);
                }
                machine.stats.branches_taken += 1;
            } else {
                machine.stats.branches_untaken += 1;
            }
            jumped = taken;
            machine.stats.inst_branch += 1;
        }
        _ => return Err(machine.illegal_opcode()),
    }

    machine.stats.instructions_retired += 1;

    if decoded.category != category::BRANCH || !jumped {
        machine.pc = machine.pc.wrapping_add(1);
    }

    if machine.trace {
        eprintln!("EX  next pc={:04x}", machine.pc);
    }

    Ok(Phase::WriteBack)
}
