//! Instruction Disassembler for the LS-8.
//!
//! Converts opcode bytes and their operands into assembler text for debug
//! tracing, the CLI `disasm` command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! let lines = disassemble(&[0b1000_0010, 0, 8, 0b0000_0001]);
//! assert_eq!(lines, ["0x00: LDI R0, 0x08", "0x03: HLT"]);
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionBits};

/// Disassembles the instruction starting at `addr`.
///
/// Operand bytes past the end of `bytes` read as zero, matching the engine's
/// over-read at the top of memory.
///
/// # Returns
///
/// The text (without address prefix) and the number of bytes it occupies.
pub fn disassemble_one(bytes: &[u8], addr: usize) -> (String, usize) {
    let byte = |i: usize| bytes.get(i).copied().unwrap_or(0);
    let opcode = byte(addr);
    let a = byte(addr + 1);
    let b = byte(addr + 2);

    let Some(inst) = decode(opcode) else {
        return (format!(".byte 0x{opcode:02X}"), 1);
    };

    let text = match inst {
        Instruction::Ldi => format!("LDI R{a}, {b:#04x}"),
        Instruction::Add | Instruction::Mul => format!("{inst} R{a}, R{b}"),
        Instruction::Prn | Instruction::Push | Instruction::Pop | Instruction::Call => {
            format!("{inst} R{a}")
        }
        Instruction::Hlt | Instruction::Ret => inst.mnemonic().to_string(),
    };
    (text, usize::from(opcode.instruction_len()))
}

/// Disassembles a whole byte range, one line per instruction, starting at address 0.
///
/// Each line is prefixed with its address as `0xNN: `.
pub fn disassemble(bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut addr = 0;
    while addr < bytes.len() {
        let (text, len) = disassemble_one(bytes, addr);
        lines.push(format!("{addr:#04x}: {text}"));
        addr += len;
    }
    lines
}
