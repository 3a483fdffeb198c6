//! LS-8 Instruction Decoder.
//!
//! Maps an opcode byte to its [`Instruction`]. Decoding is total over `u8`:
//! every undefined byte yields `None` rather than falling through.

use crate::isa::instruction::Instruction;
use crate::isa::ls8::opcodes;

/// Decodes an opcode byte.
///
/// # Arguments
///
/// * `byte` - The raw byte fetched at PC.
///
/// # Returns
///
/// The matching instruction, or `None` if the byte is not a defined opcode.
pub const fn decode(byte: u8) -> Option<Instruction> {
    match byte {
        opcodes::LDI => Some(Instruction::Ldi),
        opcodes::PRN => Some(Instruction::Prn),
        opcodes::HLT => Some(Instruction::Hlt),
        opcodes::ADD => Some(Instruction::Add),
        opcodes::MUL => Some(Instruction::Mul),
        opcodes::PUSH => Some(Instruction::Push),
        opcodes::POP => Some(Instruction::Pop),
        opcodes::CALL => Some(Instruction::Call),
        opcodes::RET => Some(Instruction::Ret),
        _ => None,
    }
}
