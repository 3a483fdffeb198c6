//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Register file, program counter, and halted flag.
//! 2. **Memory:** The 256-byte RAM the program is loaded into and the stack lives in.
//! 3. **Output:** The sink receiving PRN values.
//! 4. **Observability:** Configuration-driven tracing and execution statistics.

/// Fetch-decode-execute loop and per-instruction semantics.
pub mod execution;

/// RAM access, stack pointer arithmetic, and program loading.
pub mod memory;

use crate::common::RegisterFile;
use crate::common::constants::INITIAL_PC;
use crate::config::Config;
use crate::soc::memory::Memory;
use crate::soc::traits::OutputSink;
use crate::stats::ExecStats;

pub use self::execution::StepOutcome;

/// Main CPU structure containing all machine state.
///
/// The CPU is generic over the [`OutputSink`] that receives PRN values;
/// `Vec<u8>` collects them, [`WriterSink`](crate::soc::WriterSink) prints them.
///
/// State is `running` until HLT (or a fault) sets the halted flag; there is
/// no transition back.
#[derive(Debug)]
pub struct Cpu<S: OutputSink = Vec<u8>> {
    /// General-purpose registers `R0`-`R7`.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u8,
    /// Main memory.
    pub ram: Memory,
    /// Execution statistics.
    pub stats: ExecStats,

    halted: bool,
    output: S,
    config: Config,
}

impl<S: OutputSink> Cpu<S> {
    /// Creates a CPU with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `output` - Sink receiving values emitted by PRN.
    pub fn new(output: S) -> Self {
        Self::with_config(output, &Config::default())
    }

    /// Creates a CPU with the given configuration.
    ///
    /// Memory is zeroed, PC is 0, every register is 0 except the stack
    /// pointer, which takes `config.execution.initial_sp`.
    pub fn with_config(output: S, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.execution.initial_sp),
            pc: INITIAL_PC,
            ram: Memory::new(),
            stats: ExecStats::default(),
            halted: false,
            output,
            config: config.clone(),
        }
    }

    /// Returns `true` once HLT has executed or a fault stopped the machine.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// The active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The output sink.
    pub const fn output(&self) -> &S {
        &self.output
    }

    /// Consumes the CPU, returning its output sink.
    pub fn into_output(self) -> S {
        self.output
    }

    /// Formats the machine state as one trace line.
    ///
    /// Layout: `TRACE: PC | M[PC] M[PC+1] M[PC+2] | R0 R1 R2 R3 R4 R5 R6 R7`,
    /// every value as two-digit uppercase hex.
    pub fn trace_line(&self) -> String {
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {}",
            self.pc,
            self.ram.read(self.pc),
            self.ram.read(self.pc.wrapping_add(1)),
            self.ram.read(self.pc.wrapping_add(2)),
            self.regs.dump()
        )
    }
}

impl Default for Cpu<Vec<u8>> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
