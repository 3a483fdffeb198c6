//! System Memory (RAM).
//!
//! This module implements the LS-8 main memory. It provides:
//! 1. **Storage:** A flat array of [`MEMORY_SIZE`] byte cells, zeroed at reset.
//! 2. **Access:** Byte read/write addressed by `u8`, so every access is in range.
//! 3. **Bulk Access:** Program image loading and binary-literal dumps.

use crate::common::constants::{MEMORY_SIZE, WORD_BITS};

/// Main memory: 256 byte cells addressed `0x00`-`0xFF`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    #[inline]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes `val` at `addr`.
    #[inline]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// Copies `data` into memory starting at address 0.
    ///
    /// Returns `false` and leaves memory untouched if `data` is larger than memory.
    pub fn load(&mut self, data: &[u8]) -> bool {
        let Some(dest) = self.cells.get_mut(..data.len()) else {
            return false;
        };
        dest.copy_from_slice(data);
        true
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// The full memory contents, address 0 first.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Formats the first `len` cells as 8-bit binary literals, one per line,
    /// in the same syntax the loader accepts.
    pub fn dump_binary(&self, len: usize) -> Vec<String> {
        self.cells
            .iter()
            .take(len)
            .map(|cell| format!("{cell:0width$b}", width = WORD_BITS))
            .collect()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
