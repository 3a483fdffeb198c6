//! Output sink trait.
//!
//! The PRN instruction hands register values to an [`OutputSink`]; this is the
//! only user-visible output the machine produces. Implementations decide what
//! "printing" means: collecting values, writing text, or mocking in tests.

use std::io;

/// Receives values emitted by PRN.
pub trait OutputSink {
    /// Accepts one emitted register value.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the value could not be delivered; the engine
    /// surfaces it as [`Fault::Output`](crate::common::Fault::Output).
    fn emit(&mut self, value: u8) -> io::Result<()>;
}

/// Collects emitted values in order.
impl OutputSink for Vec<u8> {
    fn emit(&mut self, value: u8) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}
