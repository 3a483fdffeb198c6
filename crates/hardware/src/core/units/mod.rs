//! Execution units.
//!
//! The LS-8 has a single functional unit beside the control logic: the ALU.

/// Arithmetic Logic Unit for ADD and MUL.
pub mod alu;

pub use alu::Alu;
