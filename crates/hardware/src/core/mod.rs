//! Core processor implementation.
//!
//! This module contains the CPU (state, fetch-decode-execute loop, stack
//! discipline) and its execution units.

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, StepOutcome};
