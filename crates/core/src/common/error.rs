//! Halt Reason Definitions.
//!
//! This module defines the terminal conditions of the control unit. It provides:
//! 1. **Halt Representation:** The three reasons execution can stop, each with its context.
//! 2. **Diagnostics:** `Display` renders the exact one-line diagnostic the driver prints.
//! 3. **Error Handling:** Integration with the standard Rust error traits.

use std::fmt;

/// Terminal halt reasons raised by the control-unit phases.
///
/// A halt is final: once a phase returns one, no further phases execute and
/// the driver reports it alongside the final data-memory dump. There is no
/// normal termination; every run ends in one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Halt {
    /// A reserved category/type combination was decoded, or the executor was
    /// handed a form it does not recognize.
    IllegalOpcode {
        /// PC of the offending instruction.
        pc: u16,
        /// Raw instruction word.
        word: u16,
    },

    /// The same PC was entered more times than the detection threshold allows.
    InfiniteLoop {
        /// PC that kept repeating.
        pc: u16,
        /// Raw instruction word at that PC.
        word: u16,
    },

    /// A data-memory fetch or store (or an instruction fetch) referenced an
    /// address outside the valid word range.
    IllegalAddress {
        /// The out-of-range address.
        addr: u16,
        /// PC of the offending instruction.
        pc: u16,
        /// Raw instruction word.
        word: u16,
    },
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::IllegalOpcode { pc, word } => {
                write!(f, "Illegal instruction {:04x} detected at address {:04x}", word, pc)
            }
            Halt::InfiniteLoop { pc, word } => {
                write!(
                    f,
                    "Possible infinite loop detected with instruction {:04x} at address {:04x}",
                    word, pc
                )
            }
            Halt::IllegalAddress { addr, pc, word } => {
                write!(
                    f,
                    "Illegal address {:04x} detected with instruction {:04x} at address {:04x}",
                    addr, word, pc
                )
            }
        }
    }
}

impl std::error::Error for Halt {}
