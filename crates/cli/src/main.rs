//! rm16 simulator CLI.
//!
//! This binary is the single entry point for the simulator. It performs:
//! 1. **Loading:** Reads the code image (raw binary) and data image (hex text).
//! 2. **Execution:** Runs the six-phase control unit until a terminal halt.
//! 3. **Reporting:** Prints the halt diagnostic and the final data-memory dump.
//!
//! Startup failures (an image that cannot be opened or read) exit without
//! running the core and without diagnostic output.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rm16_core::config::Config;
use rm16_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "rm16",
    author,
    version,
    about = "16-bit register-machine instruction-set simulator",
    long_about = "Run a code image against a data image until the machine halts.\n\n\
                  The code image is a raw binary of big-endian instruction words; the data\n\
                  image is text lines of four-hex-digit word groups. Execution ends on an\n\
                  illegal opcode, a suspected infinite loop, or an illegal address, after\n\
                  which the final data memory is dumped.\n\n\
                  Examples:\n  rm16 program.bin data.txt\n  rm16 --trace program.bin data.txt"
)]
struct Cli {
    /// Raw binary code image, copied verbatim into code memory.
    code_image: PathBuf,

    /// Hexadecimal text data image, one word per four-digit group.
    data_image: PathBuf,

    /// Print per-phase trace lines to stderr while executing.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics after the memory dump.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::default();
    config.general.trace_instructions = cli.trace;
    config.general.print_stats = cli.stats;

    let mut sim = Simulator::new(&config);
    if sim.load_images(&cli.code_image, &cli.data_image).is_err() {
        // Startup failure: the core never runs and nothing is reported.
        process::exit(1);
    }

    let halt = sim.run();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if sim.report(&mut out, &halt).is_err() {
        process::exit(1);
    }
    out.flush().ok();

    if config.general.print_stats {
        sim.machine.stats.print();
    }
}
