//! Output devices.
//!
//! Concrete [`OutputSink`] implementations that PRN can be wired to.

/// Decimal text console over any writer.
pub mod console;

pub use console::WriterSink;

pub use crate::soc::traits::OutputSink;
