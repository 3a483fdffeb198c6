//! Instruction encoding utilities.
//!
//! Provides the closed set of LS-8 instructions and field extraction for raw
//! opcode bytes.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT};
use crate::isa::ls8::opcodes;

/// Trait for extracting fields from a raw opcode byte.
///
/// Works for any byte, defined opcode or not, so the engine can size an
/// unknown instruction when it is skipped.
pub trait InstructionBits {
    /// Number of operand bytes that follow the opcode (bits 6-7).
    fn operand_count(&self) -> u8;

    /// Total encoded length in bytes: opcode plus operands.
    fn instruction_len(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        (self >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK
    }

    #[inline(always)]
    fn instruction_len(&self) -> u8 {
        self.operand_count() + 1
    }
}

/// A decoded LS-8 instruction kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Instruction {
    /// `reg[a] = b`.
    Ldi,
    /// Emit `reg[a]` to the output sink.
    Prn,
    /// Stop the machine.
    Hlt,
    /// `reg[a] = reg[a] + reg[b]`, wrapping.
    Add,
    /// `reg[a] = reg[a] * reg[b]`, wrapping.
    Mul,
    /// `sp -= 1; mem[sp] = reg[a]`.
    Push,
    /// `reg[a] = mem[sp]; sp += 1`.
    Pop,
    /// `sp -= 1; mem[sp] = pc + 2; pc = reg[a]`.
    Call,
    /// `pc = mem[sp]; sp += 1`.
    Ret,
}

impl Instruction {
    /// Every defined instruction, in opcode table order.
    pub const ALL: [Self; 9] = [
        Self::Ldi,
        Self::Prn,
        Self::Hlt,
        Self::Add,
        Self::Mul,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
    ];

    /// The opcode byte for this instruction.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Ldi => opcodes::LDI,
            Self::Prn => opcodes::PRN,
            Self::Hlt => opcodes::HLT,
            Self::Add => opcodes::ADD,
            Self::Mul => opcodes::MUL,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
            Self::Call => opcodes::CALL,
            Self::Ret => opcodes::RET,
        }
    }

    /// Upper-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Hlt => "HLT",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
        }
    }

    /// Number of operand bytes, read from the opcode's top two bits.
    pub fn operand_count(self) -> u8 {
        self.opcode().operand_count()
    }

    /// Returns `true` for instructions executed by the ALU.
    pub const fn is_alu(self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    /// Returns `true` for instructions that leave PC where they put it
    /// instead of taking the default advance.
    pub const fn sets_pc(self) -> bool {
        matches!(self, Self::Hlt | Self::Call | Self::Ret)
    }
}

impl TryFrom<u8> for Instruction {
    type Error = u8;

    /// Decodes an opcode byte, returning the byte itself if it is undefined.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        crate::isa::decode::decode(byte).ok_or(byte)
    }
}

impl From<Instruction> for u8 {
    fn from(inst: Instruction) -> Self {
        inst.opcode()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
