//! LS-8 Opcodes.
//!
//! Each opcode is a full byte. Bits 6-7 hold the number of operand bytes that
//! follow; bit 5 marks ALU instructions. CALL and RET have bit 4 set. Those
//! two and HLT take no default PC advance.

/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;

/// Print register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Add: `ADD reg_a, reg_b` stores `reg_a + reg_b` in `reg_a`.
pub const ADD: u8 = 0b1010_0000;

/// Multiply: `MUL reg_a, reg_b` stores `reg_a * reg_b` in `reg_a`.
pub const MUL: u8 = 0b1010_0010;

/// Push register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop top of stack into register: `POP reg`.
pub const POP: u8 = 0b0100_0110;

/// Call subroutine at the address held in a register: `CALL reg`.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;
