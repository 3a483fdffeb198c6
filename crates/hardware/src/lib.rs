//! LS-8 machine library.
//!
//! This crate implements an interpreter for the LS-8, an 8-bit machine with
//! eight registers and 256 bytes of RAM:
//! 1. **Core:** Register file, program counter, fetch-decode-execute loop, and ALU.
//! 2. **Memory:** Flat byte-addressed RAM holding the program and a downward-growing stack.
//! 3. **ISA:** Opcode table, decoding, and disassembly.
//! 4. **Devices:** Output sinks receiving PRN values.
//! 5. **Simulation:** Loader for the textual binary program format, configuration, and statistics.
//!
//! ```
//! use ls8_core::Cpu;
//!
//! let source = "10000010\n0\n1000\n10000010\n1\n1001\n10100010\n0\n1\n01000111\n0\n1\n";
//! let mut cpu: Cpu = Cpu::default();
//! cpu.load(source.as_bytes()).unwrap();
//! cpu.run().unwrap();
//! assert_eq!(cpu.output(), &[72]);
//! ```

/// Common types and constants (registers, errors, machine geometry).
pub mod common;
/// Machine configuration (trace, step bound, fault policy).
pub mod config;
/// CPU core (state, execution loop, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader.
pub mod sim;
/// Memory and output devices.
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and the output sink.
pub use crate::core::Cpu;
/// Engine faults and loader errors.
pub use crate::common::{Fault, LoadError};
