//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU used by the ADD and MUL instructions.
//! Operations are selected by opcode byte; arithmetic lives in [`arithmetic`].

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

use crate::common::error::Fault;
use crate::isa::ls8::opcodes;

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Opcode byte selecting the operation (`ADD` or `MUL`).
    /// * `a`      - Value of the destination register.
    /// * `b`      - Value of the source register.
    ///
    /// # Returns
    ///
    /// The wrapped 8-bit result.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnsupportedAluOperation`] for any other opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::Alu;
    /// use ls8_core::isa::ls8::opcodes;
    ///
    /// assert_eq!(Alu::execute(opcodes::MUL, 8, 9).ok(), Some(72));
    /// assert_eq!(Alu::execute(opcodes::ADD, 200, 100).ok(), Some(44));
    /// assert!(Alu::execute(opcodes::LDI, 1, 2).is_err());
    /// ```
    pub fn execute(opcode: u8, a: u8, b: u8) -> Result<u8, Fault> {
        match opcode {
            opcodes::ADD => Ok(arithmetic::add(a, b)),
            opcodes::MUL => Ok(arithmetic::mul(a, b)),
            _ => Err(Fault::UnsupportedAluOperation { opcode }),
        }
    }
}
