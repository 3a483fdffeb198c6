//! LS-8 register conventions.
//!
//! Register roles are conventions only; the hardware treats every register alike
//! apart from the reset value of the stack pointer.

/// Register `R7`, used as the stack pointer by PUSH, POP, CALL, and RET.
pub const REG_SP: usize = 7;
