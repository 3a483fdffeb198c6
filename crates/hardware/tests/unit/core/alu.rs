//! ALU Arithmetic Tests
//!
//! Deterministic edge cases for the two arithmetic operations. Both wrap
//! modulo 256; every other opcode is rejected without producing a value.

use ls8_core::common::Fault;
use ls8_core::core::units::alu::Alu;
use ls8_core::core::units::alu::arithmetic;
use ls8_core::isa::ls8::opcodes::{ADD, HLT, LDI, MUL, PRN};
use proptest::prelude::*;
use rstest::rstest;

// ─── Helper ──────────────────────────────────────────────────────────────────

fn alu(opcode: u8, a: u8, b: u8) -> u8 {
    Alu::execute(opcode, a, b).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════════
//  ADD
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0, 0, 0)]
#[case(1, 2, 3)]
#[case(0x7F, 1, 0x80)]
#[case(0xFF, 1, 0x00)]
#[case(200, 100, 44)]
#[case(0xFF, 0xFF, 0xFE)]
fn add_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(ADD, a, b), expected);
    assert_eq!(arithmetic::add(a, b), expected);
}

// ═════════════════════════════════════════════════════════════════════════════
//  MUL
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(8, 9, 72)]
#[case(0, 0xFF, 0)]
#[case(1, 0xAB, 0xAB)]
#[case(16, 16, 0)]
#[case(20, 20, 144)]
#[case(0xFF, 0xFF, 1)]
fn mul_wraps(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(alu(MUL, a, b), expected);
    assert_eq!(arithmetic::mul(a, b), expected);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Unsupported operations
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(LDI)]
#[case(PRN)]
#[case(HLT)]
#[case(0xFF)]
fn non_arithmetic_opcode_rejected(#[case] opcode: u8) {
    assert!(matches!(
        Alu::execute(opcode, 1, 2),
        Err(Fault::UnsupportedAluOperation { opcode: op }) if op == opcode
    ));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Algebraic properties
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn add_matches_modular_reference(a: u8, b: u8) {
        prop_assert_eq!(alu(ADD, a, b) as u32, (a as u32 + b as u32) % 256);
    }

    #[test]
    fn mul_matches_modular_reference(a: u8, b: u8) {
        prop_assert_eq!(alu(MUL, a, b) as u32, (a as u32 * b as u32) % 256);
    }

    #[test]
    fn add_and_mul_commute(a: u8, b: u8) {
        prop_assert_eq!(alu(ADD, a, b), alu(ADD, b, a));
        prop_assert_eq!(alu(MUL, a, b), alu(MUL, b, a));
    }

    #[test]
    fn add_and_mul_associate(a: u8, b: u8, c: u8) {
        prop_assert_eq!(alu(ADD, alu(ADD, a, b), c), alu(ADD, a, alu(ADD, b, c)));
        prop_assert_eq!(alu(MUL, alu(MUL, a, b), c), alu(MUL, a, alu(MUL, b, c)));
    }
}
