//! System Components.
//!
//! This module organizes the components around the CPU: main memory and the
//! output devices that receive PRN values.

/// Output sink implementations.
pub mod devices;

/// Main memory.
pub mod memory;

/// Output sink trait definition.
pub mod traits;

pub use devices::WriterSink;
pub use memory::Memory;
pub use traits::OutputSink;
