//! Host runner: loads a program image into the 0x8000 window, runs it and
//! prints the final machine state.

use std::{fs::read, path::PathBuf};

use gumdrop::Options;
use lite6502::{ExecutionError, FlatMemory, LoadError, CPU};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use thiserror::Error;

/// Instruction budget used when `--max-steps` is not given.
const DEFAULT_MAX_STEPS: u64 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Eq, Options)]
struct Arguments {
    #[options(help = "Show help text")]
    help: bool,
    #[options(help = "Program image to load at 0x8000 (at most 32KiB)", free, required)]
    pub file: PathBuf,
    #[options(help = "Stop after this many instructions (default: 1000000)")]
    pub max_steps: Option<u64>,
    #[options(help = "Print every non-zero memory byte after the run")]
    pub dump: bool,
    #[options(help = "Trace every executed instruction")]
    pub verbose: bool,
}

impl Arguments {
    fn step_budget(&self) -> u64 {
        self.max_steps.unwrap_or(DEFAULT_MAX_STEPS)
    }
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> Result<(), Error> {
    let options = Arguments::parse_args_default_or_exit();

    let level = if options.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let image = read(&options.file)?;

    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load(&image)?;

    let state = cpu.run_for_steps(options.step_budget())?;

    println!(
        "{:?} after {} steps: PC={:04X} A={:02X} X={:02X} Y={:02X} SP={:02X} P={:08b}",
        state,
        cpu.steps(),
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status()
    );

    if options.dump {
        for (addr, &value) in cpu.memory().as_slice().iter().enumerate() {
            if value != 0 {
                println!("0x{addr:04X}: 0x{value:02X}");
            }
        }
    }

    Ok(())
}
