//! Text console output.
//!
//! Writes each emitted value as a decimal number on its own line to any
//! [`Write`] implementation, typically standard output.

use std::io::{self, Write};

use crate::soc::traits::OutputSink;

/// An [`OutputSink`] that prints values as decimal text lines.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwraps the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    /// A sink printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, value: u8) -> io::Result<()> {
        writeln!(self.writer, "{value}")?;
        self.writer.flush()
    }
}
