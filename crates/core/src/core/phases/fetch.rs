//! Instruction Fetch (IF) Phase.
//!
//! Reads the two code bytes at the PC and stages the word for decode. The
//! only way this phase can fail is a PC outside code memory, which is
//! reachable through a branch whose target lies past the code region.

use crate::common::error::Halt;
use crate::core::control::Phase;
use crate::core::machine::Machine;

/// Executes the instruction fetch phase.
///
/// Stages the raw word at the PC into the latch and clears the decoded
/// record from the previous cycle.
pub fn fetch_stage(machine: &mut Machine) -> Result<Phase, Halt> {
    let word = machine
        .code
        .read_word(machine.pc)
        .ok_or_else(|| machine.illegal_address(machine.pc))?;

    machine.latch.word = word;
    machine.latch.decoded = None;

    if machine.trace {
        eprintln!("IF  pc={:04x} word={:04x}", machine.pc, word);
    }

    Ok(Phase::DecodeInstr)
}
