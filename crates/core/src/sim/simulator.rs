//! Simulator: owns the machine and drives it end to end.
//!
//! The driver workflow is load, run, report: the loaders populate the
//! memories, `run` walks the control unit to its terminal halt, and
//! `report` writes the diagnostic line and the final data-memory dump.

use std::io::{self, Write};
use std::path::Path;

use crate::common::error::Halt;
use crate::config::Config;
use crate::core::control;
use crate::core::machine::Machine;
use crate::sim::{dump, loader};

/// Top-level simulator wrapping the architectural machine state.
pub struct Simulator {
    /// The simulated machine.
    pub machine: Machine,
}

impl Simulator {
    /// Creates a simulator configured from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            machine: Machine::from_config(config),
        }
    }

    /// Loads the code and data images into the machine memories.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when either file cannot be read;
    /// the machine must not be run in that case.
    pub fn load_images(&mut self, code_path: &Path, data_path: &Path) -> io::Result<()> {
        loader::load_code_image(code_path, &mut self.machine.code)?;
        loader::load_data_image(data_path, &mut self.machine.data)?;
        Ok(())
    }

    /// Runs the machine until a phase raises a terminal halt.
    pub fn run(&mut self) -> Halt {
        control::run_to_halt(&mut self.machine)
    }

    /// Writes the halt diagnostic, a blank separator line, and the final
    /// data-memory dump to `out`.
    pub fn report<W: Write>(&self, out: &mut W, halt: &Halt) -> io::Result<()> {
        writeln!(out, "{}", halt)?;
        writeln!(out)?;
        dump::dump_memory(out, self.machine.data.as_bytes())
    }
}
