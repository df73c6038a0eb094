//! Per-instruction staging latch.
//!
//! The phases communicate through this latch rather than through return
//! values: fetch stages the raw word, decode stages the normalized record,
//! and operand fetch stages the resolved 16-bit right operand for execute.

use crate::isa::instruction::Decoded;

/// Values staged between the phases of one instruction cycle.
#[derive(Default)]
pub struct StageLatch {
    /// Raw instruction word staged by the fetch phase.
    pub word: u16,
    /// Decoded record staged by the decode phase.
    pub decoded: Option<Decoded>,
    /// Resolved right-operand value staged by the operand-fetch phase.
    pub operand: u16,
}
