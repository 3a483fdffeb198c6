//! LS-8 base instruction set.
//!
//! Contains the opcode byte values for every defined instruction.

/// Opcode byte values.
pub mod opcodes;
