//! LS-8 Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 8-bit
//! general-purpose registers. It provides:
//! 1. **Storage:** Eight registers `R0`-`R7`, all arithmetic wrapping modulo 256.
//! 2. **Stack Pointer Convention:** `R7` is reset to [`INITIAL_SP`] and used by
//!    the stack instructions, but is otherwise an ordinary register.
//! 3. **Observability:** Hex dumps of the register state for trace output.

use std::fmt::Write as _;

use serde::Serialize;

use crate::common::constants::{INITIAL_SP, NUM_REGISTERS};
use crate::isa::abi::REG_SP;

/// The general-purpose register file.
///
/// Indices passed to [`read`](Self::read) and [`write`](Self::write) must be
/// below [`NUM_REGISTERS`]; use [`get`](Self::get) or [`is_valid`](Self::is_valid)
/// for indices taken from untrusted operand bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with all registers zero and `R7` set to `initial_sp`.
    pub fn new(initial_sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP] = initial_sp;
        Self { regs }
    }

    /// Returns `true` if `idx` names a register.
    #[inline]
    pub const fn is_valid(idx: usize) -> bool {
        idx < NUM_REGISTERS
    }

    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`NUM_REGISTERS`].
    #[inline]
    pub fn read(&self, idx: usize) -> u8 {
        self.regs[idx]
    }

    /// Reads a register, returning `None` for an out-of-range index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.regs.get(idx).copied()
    }

    /// Writes a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`NUM_REGISTERS`].
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx] = val;
    }

    /// Current value of the stack pointer (`R7`).
    #[inline]
    pub fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub fn set_sp(&mut self, val: u8) {
        self.regs[REG_SP] = val;
    }

    /// Returns a copy of all register values, `R0` first.
    pub const fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }

    /// Formats every register as two-digit uppercase hex, space separated.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(NUM_REGISTERS * 3);
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{val:02X}");
        }
        out
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(INITIAL_SP)
    }
}
