//! RAM Access and Program Loading.
//!
//! This module implements the CPU's view of memory. It provides:
//! 1. **RAM Access:** Byte reads and writes by address.
//! 2. **Stack Pointer:** Wrapping decrement/increment of `R7` for the downward-growing stack.
//! 3. **Loading:** Entry points that parse program source into RAM.

use std::io::BufRead;
use std::path::Path;

use super::Cpu;
use crate::common::error::LoadError;
use crate::sim::loader;
use crate::soc::traits::OutputSink;

impl<S: OutputSink> Cpu<S> {
    /// Reads the byte at `addr`.
    #[inline]
    pub const fn ram_read(&self, addr: u8) -> u8 {
        self.ram.read(addr)
    }

    /// Writes `val` at `addr`.
    #[inline]
    pub const fn ram_write(&mut self, addr: u8, val: u8) {
        self.ram.write(addr, val);
    }

    /// Decrements the stack pointer, wrapping, and returns the new value.
    pub(super) fn decrement_sp(&mut self) -> u8 {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        sp
    }

    /// Increments the stack pointer, wrapping.
    pub(super) fn increment_sp(&mut self) {
        let sp = self.regs.sp().wrapping_add(1);
        self.regs.set_sp(sp);
    }

    /// Loads program source into RAM starting at address 0.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    ///
    /// # Errors
    ///
    /// See [`loader::load_program`]; on error RAM is unchanged.
    pub fn load<R: BufRead>(&mut self, source: R) -> Result<usize, LoadError> {
        loader::load_program(&mut self.ram, source)
    }

    /// Loads a program file into RAM starting at address 0.
    ///
    /// # Errors
    ///
    /// See [`loader::load_file`]; on error RAM is unchanged.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        loader::load_file(&mut self.ram, path)
    }
}
