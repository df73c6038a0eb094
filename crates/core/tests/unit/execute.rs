//! # Execute Semantics Tests
//!
//! Arithmetic wraparound, logical operations, shifts, MOVE forms, and the
//! branch family, each driven through whole instruction cycles.

use rm16_core::common::error::Halt;
use rm16_core::isa::opcodes::{branch_type, category};

use crate::common::builder::{
    alu_imm, alu_reg, branch, jr, move_imm_to_mem, move_imm_to_reg, move_mem_to_reg,
    move_reg_to_mem, shift_left, shift_right,
};
use crate::common::harness::TestContext;

// ── Arithmetic and logic ──────────────────────────────────

#[test]
fn add_immediate() {
    let mut ctx = TestContext::new().load_program(&[alu_imm(category::ADD, 1, 4)]);
    ctx.step_instruction().expect("add");
    assert_eq!(ctx.get_reg(1), 4);
    assert_eq!(ctx.pc(), 1);
}

#[test]
fn add_negative_immediate_is_sign_extended() {
    let mut ctx = TestContext::new().load_program(&[alu_imm(category::ADD, 1, -1)]);
    ctx.set_reg(1, 10);
    ctx.step_instruction().expect("add");
    assert_eq!(ctx.get_reg(1), 9);
}

#[test]
fn add_wraps_around_at_word_width() {
    let mut ctx = TestContext::new().load_program(&[alu_imm(category::ADD, 1, 1)]);
    ctx.set_reg(1, 0xFFFF);
    ctx.step_instruction().expect("add");
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn sub_wraps_below_zero() {
    let mut ctx = TestContext::new().load_program(&[alu_imm(category::SUB, 1, 1)]);
    ctx.step_instruction().expect("sub");
    assert_eq!(ctx.get_reg(1), 0xFFFF);
}

#[test]
fn register_operand_is_not_sign_extended() {
    // A register value with bit 5 set must be used whole, not treated as a
    // 6-bit field.
    let mut ctx = TestContext::new().load_program(&[alu_reg(category::ADD, 1, 2)]);
    ctx.set_reg(2, 0x1234);
    ctx.step_instruction().expect("add");
    assert_eq!(ctx.get_reg(1), 0x1234);
}

#[test]
fn and_or_xor_register_forms() {
    let mut ctx = TestContext::new().load_program(&[
        alu_reg(category::AND, 1, 4),
        alu_reg(category::OR, 2, 4),
        alu_reg(category::XOR, 3, 4),
    ]);
    ctx.set_reg(1, 0b1100);
    ctx.set_reg(2, 0b1100);
    ctx.set_reg(3, 0b1100);
    ctx.set_reg(4, 0b1010);

    ctx.step_instruction().expect("and");
    ctx.step_instruction().expect("or");
    ctx.step_instruction().expect("xor");

    assert_eq!(ctx.get_reg(1), 0b1000);
    assert_eq!(ctx.get_reg(2), 0b1110);
    assert_eq!(ctx.get_reg(3), 0b0110);
}

// ── Shifts ────────────────────────────────────────────────

#[test]
fn shift_right_is_logical() {
    let mut ctx = TestContext::new().load_program(&[shift_right(1)]);
    ctx.set_reg(1, 0x8002);
    ctx.step_instruction().expect("shift");
    assert_eq!(ctx.get_reg(1), 0x4001);
}

#[test]
fn shift_left_drops_the_top_bit() {
    let mut ctx = TestContext::new().load_program(&[shift_left(1)]);
    ctx.set_reg(1, 0x8001);
    ctx.step_instruction().expect("shift");
    assert_eq!(ctx.get_reg(1), 0x0002);
}

// ── MOVE ──────────────────────────────────────────────────

#[test]
fn move_immediate_to_register() {
    let mut ctx = TestContext::new().load_program(&[move_imm_to_reg(3, -2)]);
    ctx.step_instruction().expect("move");
    assert_eq!(ctx.get_reg(3), 0xFFFE);
}

#[test]
fn move_register_to_memory_writes_big_endian() {
    let mut ctx = TestContext::new().load_program(&[move_reg_to_mem(2, 1)]);
    ctx.set_reg(1, 0xBEEF);
    ctx.set_reg(2, 0x10);
    ctx.step_instruction().expect("store");
    assert_eq!(ctx.machine().data.read_word(0x10), Some(0xBEEF));
    assert_eq!(&ctx.machine().data.as_bytes()[0x20..0x22], &[0xBE, 0xEF]);
}

#[test]
fn move_immediate_to_memory() {
    let mut ctx = TestContext::new().load_program(&[move_imm_to_mem(1, 7)]);
    ctx.set_reg(1, 0x3FF);
    ctx.step_instruction().expect("store");
    assert_eq!(ctx.machine().data.read_word(0x3FF), Some(0x0007));
}

#[test]
fn memory_operand_is_not_sign_extended() {
    // A full 16-bit value survives the store/load round trip; the 6-bit
    // sign extension applies to immediates only.
    let mut ctx = TestContext::new().load_program(&[
        move_reg_to_mem(2, 1),
        move_mem_to_reg(3, 2),
    ]);
    ctx.set_reg(1, 0x0020);
    ctx.set_reg(2, 0x40);
    ctx.step_instruction().expect("store");
    ctx.step_instruction().expect("load");
    assert_eq!(ctx.get_reg(3), 0x0020);
}

#[test]
fn store_to_out_of_range_address_halts() {
    let mut ctx = TestContext::new().load_program(&[move_reg_to_mem(1, 2)]);
    ctx.set_reg(1, 0x400);
    let halt = ctx.step_instruction().expect_err("store fault");
    assert!(matches!(halt, Halt::IllegalAddress { addr: 0x400, pc: 0, .. }));
}

#[test]
fn load_from_out_of_range_address_halts() {
    let mut ctx = TestContext::new().load_program(&[move_mem_to_reg(1, 2)]);
    ctx.set_reg(2, 0x400);
    let halt = ctx.step_instruction().expect_err("load fault");
    assert!(matches!(halt, Halt::IllegalAddress { addr: 0x400, pc: 0, .. }));
}

#[test]
fn faulting_store_does_not_retire() {
    let mut ctx = TestContext::new().load_program(&[move_reg_to_mem(1, 2)]);
    ctx.set_reg(1, 0x400);
    ctx.step_instruction().expect_err("store fault");
    assert_eq!(ctx.machine().stats.instructions_retired, 0);
    assert_eq!(ctx.pc(), 0);
}

// ── Branches ──────────────────────────────────────────────

#[test]
fn jr_lands_exactly_on_its_target() {
    let mut ctx = TestContext::new().load_program(&[jr(1)]);
    ctx.set_reg(1, 7);
    ctx.step_instruction().expect("jr");
    assert_eq!(ctx.pc(), 7);
}

#[test]
fn taken_branch_advances_by_the_displacement() {
    let mut ctx = TestContext::new().load_program(&[branch(branch_type::BEQ, 1, 2)]);
    ctx.step_instruction().expect("beq");
    assert_eq!(ctx.pc(), 2);
}

#[test]
fn untaken_branch_falls_through() {
    let mut ctx = TestContext::new().load_program(&[branch(branch_type::BEQ, 1, 2)]);
    ctx.set_reg(1, 1);
    ctx.step_instruction().expect("beq");
    assert_eq!(ctx.pc(), 1);
}

#[test]
fn negative_displacement_branches_backwards() {
    let mut ctx = TestContext::new().load_program(&[
        alu_imm(category::ADD, 1, 0),
        branch(branch_type::BEQ, 1, -1),
    ]);
    ctx.step_instruction().expect("add");
    ctx.step_instruction().expect("beq");
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn branch_comparisons_are_signed() {
    // R1 = -1 signed, R0 = 1: BLT must take, which an unsigned compare of
    // 0xFFFF against 0x0001 would miss.
    let mut ctx = TestContext::new().load_program(&[branch(branch_type::BLT, 1, 3)]);
    ctx.set_reg(0, 1);
    ctx.set_reg(1, 0xFFFF);
    ctx.step_instruction().expect("blt");
    assert_eq!(ctx.pc(), 3);
}

#[test]
fn bne_bgt_ble_bge_predicates() {
    let cases = [
        // (type, lhs, comparand, taken)
        (branch_type::BNE, 5u16, 5u16, false),
        (branch_type::BNE, 4, 5, true),
        (branch_type::BGT, 6, 5, true),
        (branch_type::BGT, 5, 5, false),
        (branch_type::BLE, 5, 5, true),
        (branch_type::BLE, 6, 5, false),
        (branch_type::BGE, 5, 5, true),
        (branch_type::BGE, 4, 5, false),
    ];
    for (bt, lhs, comparand, taken) in cases {
        let mut ctx = TestContext::new().load_program(&[branch(bt, 1, 2)]);
        ctx.set_reg(0, comparand);
        ctx.set_reg(1, lhs);
        ctx.step_instruction().expect("branch");
        let expected = if taken { 2 } else { 1 };
        assert_eq!(ctx.pc(), expected, "type={bt} lhs={lhs} rhs={comparand}");
    }
}

#[test]
fn branch_statistics_track_taken_and_untaken() {
    let mut ctx = TestContext::new().load_program(&[
        branch(branch_type::BEQ, 1, 1),
        branch(branch_type::BNE, 1, 1),
    ]);
    ctx.step_instruction().expect("taken");
    ctx.step_instruction().expect("untaken");
    assert_eq!(ctx.machine().stats.branches_taken, 1);
    assert_eq!(ctx.machine().stats.branches_untaken, 1);
    assert_eq!(ctx.machine().stats.inst_branch, 2);
}
