//! Instruction decoder.
//!
//! Maps a raw 16-bit word to a normalized [`Decoded`] record, or `None` when
//! the category/type combination is reserved. Decoding never reads machine
//! state: memory-indirect operands are only classified here and fetched
//! later by the operand phase.

use crate::isa::instruction::{Decoded, InstructionBits, RightOperand};
use crate::isa::opcodes::{alu_type, branch_type, category, move_type, shift_type};

/// Decodes a raw instruction word.
///
/// Total over all 16-bit inputs: every word either decodes to one of the
/// enumerated forms or returns `None`, which the decode phase reports as an
/// illegal opcode.
///
/// # Arguments
///
/// * `word` - The raw 16-bit instruction encoding.
pub fn decode(word: u16) -> Option<Decoded> {
    let cat = word.category();
    let op_type = word.op_type();

    let rhs = match cat {
        category::ADD | category::SUB | category::AND | category::OR | category::XOR => {
            match op_type {
                alu_type::IMMEDIATE => RightOperand::Immediate(word.right_field()),
                alu_type::REGISTER => RightOperand::Register(word.right_reg()),
                _ => return None,
            }
        }
        category::MOVE => match op_type {
            move_type::IMM_TO_REG | move_type::IMM_TO_MEM => {
                RightOperand::Immediate(word.right_field())
            }
            move_type::MEM_TO_REG => RightOperand::Memory(word.right_reg()),
            move_type::REG_TO_MEM => RightOperand::Register(word.right_reg()),
            _ => return None,
        },
        category::SHIFT => match op_type {
            // The shifts take no right operand; the raw field rides along
            // as an ignored immediate.
            shift_type::RIGHT | shift_type::LEFT => RightOperand::Immediate(word.right_field()),
            _ => return None,
        },
        category::BRANCH => match op_type {
            branch_type::JR..=branch_type::BGE => RightOperand::Immediate(word.right_field()),
            _ => return None,
        },
        // The category field is three bits wide; this arm cannot match.
        _ => return None,
    };

    Some(Decoded {
        raw: word,
        category: cat,
        op_type,
        dst: word.left_reg(),
        rhs,
    })
}
