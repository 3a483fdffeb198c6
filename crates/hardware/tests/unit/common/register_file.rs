//! # Register File Tests
//!
//! Tests for the eight-entry register file and the stack pointer convention.

use ls8_core::common::RegisterFile;
use ls8_core::common::constants::{INITIAL_SP, NUM_REGISTERS};
use ls8_core::isa::abi::REG_SP;

#[test]
fn test_default_initializes_sp_only() {
    let regs = RegisterFile::default();
    for i in 0..REG_SP {
        assert_eq!(regs.read(i), 0, "R{i} should reset to 0");
    }
    assert_eq!(regs.read(REG_SP), INITIAL_SP);
    assert_eq!(regs.sp(), INITIAL_SP);
}

#[test]
fn test_custom_initial_sp() {
    let regs = RegisterFile::new(0x80);
    assert_eq!(regs.sp(), 0x80);
}

#[test]
fn test_write_read_every_register() {
    let mut regs = RegisterFile::default();
    for i in 0..NUM_REGISTERS {
        regs.write(i, (i as u8) * 11);
    }
    for i in 0..NUM_REGISTERS {
        assert_eq!(regs.read(i), (i as u8) * 11);
    }
}

#[test]
fn test_sp_is_an_ordinary_register() {
    let mut regs = RegisterFile::default();
    regs.write(REG_SP, 0x10);
    assert_eq!(regs.sp(), 0x10);
    regs.set_sp(0x20);
    assert_eq!(regs.read(REG_SP), 0x20);
}

#[test]
fn test_get_bounds() {
    let regs = RegisterFile::default();
    assert_eq!(regs.get(7), Some(INITIAL_SP));
    assert_eq!(regs.get(8), None);
    assert!(RegisterFile::is_valid(7));
    assert!(!RegisterFile::is_valid(8));
}

#[test]
#[should_panic]
fn test_read_out_of_range_panics() {
    let regs = RegisterFile::default();
    let _ = regs.read(NUM_REGISTERS);
}

#[test]
fn test_dump_is_uppercase_hex() {
    let mut regs = RegisterFile::default();
    regs.write(0, 0xAB);
    regs.write(1, 0x05);
    assert_eq!(regs.dump(), "AB 05 00 00 00 00 00 F4");
}

#[test]
fn test_snapshot_matches_reads() {
    let mut regs = RegisterFile::default();
    regs.write(3, 42);
    let snap = regs.snapshot();
    assert_eq!(snap[3], 42);
    assert_eq!(snap[REG_SP], INITIAL_SP);
}
