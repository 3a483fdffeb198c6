//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, the decoded instruction type, the decoder,
//! and a disassembler.

/// Register role conventions (stack pointer).
pub mod abi;

/// Opcode byte to instruction decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction kinds and opcode field extraction.
pub mod instruction;

/// LS-8 base instruction set opcodes.
pub mod ls8;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};
