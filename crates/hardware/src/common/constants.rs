//! Global Machine Constants.
//!
//! This module defines the fixed geometry of the LS-8. It includes:
//! 1. **Memory Constants:** Size of the flat byte-addressed RAM.
//! 2. **Register Constants:** Size of the register file and reset values.
//! 3. **Instruction Constants:** Shift and mask for the operand-count field.
//! 4. **Source Constants:** Syntax of the textual program format.

/// Number of byte cells in RAM. Every `u8` is a valid address.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Reset value of the stack pointer register (top of the stack region).
pub const INITIAL_SP: u8 = 0xF4;

/// Reset value of the program counter.
pub const INITIAL_PC: u8 = 0x00;

/// Bit position of the operand-count field in an opcode byte (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit mask for the operand-count field after shifting.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Starts a comment in program source; the rest of the line is ignored.
pub const COMMENT_DELIMITER: char = '#';

/// Width of a machine word in bits (one binary literal per line).
pub const WORD_BITS: usize = 8;
