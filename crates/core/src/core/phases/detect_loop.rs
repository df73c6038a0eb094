//! Loop Detection (EA) Phase.
//!
//! Counts how often each PC has been entered and halts once a single PC
//! crosses the detection threshold. This phase also stands in for effective
//! address calculation: the EA of every memory form is simply the value of
//! the addressing register, so there is nothing to compute.

use crate::common::constants::INFINITE_LOOP_THRESHOLD;
use crate::common::error::Halt;
use crate::core::control::Phase;
use crate::core::machine::Machine;

/// Executes the loop-detection phase.
pub fn detect_loop_stage(machine: &mut Machine) -> Result<Phase, Halt> {
    let visits = machine.visits.entry(machine.pc).or_insert(0);
    *visits += 1;
    if *visits > INFINITE_LOOP_THRESHOLD {
        return Err(machine.infinite_loop());
    }
    Ok(Phase::FetchOperands)
}
