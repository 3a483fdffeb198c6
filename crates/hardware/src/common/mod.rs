//! Common types and constants used throughout the LS-8 machine.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Memory size, register count, reset values, source syntax.
//! 2. **Error Handling:** Loader errors, engine faults, and configuration errors.
//! 3. **Register Management:** The eight-entry register file.

/// Machine-wide constants.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INITIAL_SP, MEMORY_SIZE, NUM_REGISTERS};
pub use error::{ConfigError, Fault, LoadError};
pub use reg::RegisterFile;
