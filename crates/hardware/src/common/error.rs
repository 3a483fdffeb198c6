//! Error Taxonomy.
//!
//! This module defines every error the machine can report. It provides:
//! 1. **Load Errors:** Failures reading or validating program source.
//! 2. **Faults:** Conditions raised by the execution engine while stepping.
//! 3. **Configuration Errors:** Failures reading or parsing a JSON config.
//!
//! Malformed source lines are not represented here: the loader skips them.

use std::io;

use thiserror::Error;

/// Errors reported by the program loader.
///
/// When any of these is returned, memory has not been modified.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program source could not be opened or read.
    #[error("program source unavailable: {source}")]
    SourceUnavailable {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },

    /// A binary literal does not fit in one byte.
    #[error("line {line}: binary literal `{text}` does not fit in 8 bits")]
    ValueOutOfRange {
        /// One-based line number in the source.
        line: usize,
        /// The literal as written, comment and whitespace removed.
        text: String,
    },

    /// The program has more bytes than memory has cells.
    #[error("program is {len} bytes but memory holds {capacity}")]
    ProgramTooLarge {
        /// Number of significant lines in the source.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

/// Conditions raised by the execution engine.
#[derive(Debug, Error)]
pub enum Fault {
    /// The byte at `pc` is not a defined opcode.
    #[error("unknown instruction {opcode:#010b} ({opcode:#04x}) at pc {pc:#04x}")]
    UnknownInstruction {
        /// The offending byte.
        opcode: u8,
        /// Address it was fetched from.
        pc: u8,
    },

    /// The ALU was handed an opcode it does not implement.
    ///
    /// This is an engine bug, not a property of the program being run.
    #[error("unsupported ALU operation {opcode:#04x}")]
    UnsupportedAluOperation {
        /// The opcode passed to the ALU.
        opcode: u8,
    },

    /// An operand byte used as a register index is out of range.
    #[error("register index {index} out of range at pc {pc:#04x}")]
    InvalidRegister {
        /// The operand byte.
        index: u8,
        /// Address of the faulting instruction.
        pc: u8,
    },

    /// A bounded run reached its step limit before the program halted.
    #[error("step limit of {limit} reached before HLT")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
    },

    /// The output sink rejected a value.
    #[error("output sink failed: {source}")]
    Output {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
}

/// Errors reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read configuration: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {source}")]
    Parse {
        /// Underlying parse failure.
        #[from]
        source: serde_json::Error,
    },
}
