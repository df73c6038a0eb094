//! Instruction disassembler.
//!
//! Converts a 16-bit instruction encoding into a human-readable mnemonic
//! string for trace output and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rm16_core::isa::disasm::disassemble;
//! let text = disassemble(0x0044); // ADD R1, 4
//! assert_eq!(text, "ADD R1, 4");
//! ```

use crate::common::constants::IMMEDIATE_BITS;
use crate::common::data::sign_extend;
use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, RightOperand};
use crate::isa::opcodes::{branch_type, category, move_type, shift_type};

/// Mnemonics for the arithmetic/logical categories, indexed by category.
const ALU_NAMES: [&str; 5] = ["ADD", "SUB", "AND", "OR", "XOR"];

/// Mnemonics for the branch types, indexed by type.
const BRANCH_NAMES: [&str; 7] = ["JR", "BEQ", "BNE", "BLT", "BGT", "BLE", "BGE"];

/// Renders the right operand of an ALU or MOVE form.
fn rhs_text(rhs: RightOperand) -> String {
    match rhs {
        RightOperand::Immediate(raw) => {
            format!("{}", sign_extend(u16::from(raw), IMMEDIATE_BITS) as i16)
        }
        RightOperand::Register(idx) => format!("R{}", idx),
        RightOperand::Memory(idx) => format!("[R{}]", idx),
    }
}

/// Disassembles a 16-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"MOVE [R2], R1"` or `"unknown"` for reserved
/// encodings.
pub fn disassemble(word: u16) -> String {
    let Some(decoded) = decode(word) else {
        return "unknown".to_string();
    };
    render(&decoded)
}

fn render(decoded: &Decoded) -> String {
    match decoded.category {
        category::ADD | category::SUB | category::AND | category::OR | category::XOR => {
            let name = ALU_NAMES[decoded.category as usize];
            format!("{} R{}, {}", name, decoded.dst, rhs_text(decoded.rhs))
        }
        category::MOVE => match decoded.op_type {
            move_type::IMM_TO_REG | move_type::MEM_TO_REG => {
                format!("MOVE R{}, {}", decoded.dst, rhs_text(decoded.rhs))
            }
            _ => format!("MOVE [R{}], {}", decoded.dst, rhs_text(decoded.rhs)),
        },
        category::SHIFT => {
            let name = if decoded.op_type == shift_type::RIGHT {
                "SRR"
            } else {
                "SRL"
            };
            format!("{} R{}", name, decoded.dst)
        }
        category::BRANCH => {
            let name = BRANCH_NAMES[decoded.op_type as usize];
            if decoded.op_type == branch_type::JR {
                format!("JR R{}", decoded.dst)
            } else {
                format!("{} R{}, {}", name, decoded.dst, rhs_text(decoded.rhs))
            }
        }
        _ => "unknown".to_string(),
    }
}
