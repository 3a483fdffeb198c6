//! # Stack Discipline Tests
//!
//! The stack grows downward from `0xF4` through `R7`. PUSH decrements then
//! stores, POP loads then increments, CALL pushes the return address, RET
//! pops it into PC.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::config::Config;
use ls8_core::isa::abi::REG_SP;

#[test]
fn test_push_pop_moves_value_between_registers() {
    let program = ProgramBuilder::new()
        .ldi(0, 5)
        .push(0)
        .ldi(0, 0)
        .pop(1)
        .prn(1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_bytes(&program);
    assert!(ctx.run().is_ok());

    assert_eq!(ctx.output(), &[5]);
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.reg(REG_SP), 0xF4);
    assert_eq!(ctx.cpu.ram_read(0xF3), 5);
}

#[test]
fn test_push_pop_same_register_restores_value() {
    let program = ProgramBuilder::new()
        .ldi(0, 5)
        .push(0)
        .ldi(0, 0)
        .pop(0)
        .prn(0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_bytes(&program);
    assert!(ctx.run().is_ok());

    assert_eq!(ctx.output(), &[5]);
    assert_eq!(ctx.reg(0), 5);
    assert_eq!(ctx.cpu.regs.sp(), 0xF4);
}

#[test]
fn test_push_decrements_sp_then_stores() {
    let program = ProgramBuilder::new().ldi(2, 0x77).push(2).build();
    let mut ctx = TestContext::new().load_bytes(&program);
    assert!(ctx.cpu.step().is_ok());
    assert!(ctx.cpu.step().is_ok());

    assert_eq!(ctx.cpu.regs.sp(), 0xF3);
    assert_eq!(ctx.cpu.ram_read(0xF3), 0x77);
    assert_eq!(ctx.cpu.ram_read(0xF4), 0);
    assert_eq!(ctx.cpu.pc, 5);
}

#[test]
fn test_pops_return_pushes_in_reverse() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .push(0)
        .ldi(0, 2)
        .push(0)
        .ldi(0, 3)
        .push(0)
        .pop(1)
        .prn(1)
        .pop(1)
        .prn(1)
        .pop(1)
        .prn(1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_bytes(&program);
    assert!(ctx.run().is_ok());
    assert_eq!(ctx.output(), &[3, 2, 1]);
    assert_eq!(ctx.cpu.regs.sp(), 0xF4);
}

#[test]
fn test_pop_on_empty_stack_reads_above_sp() {
    let mut ctx = TestContext::new().load_bytes(&ProgramBuilder::new().pop(0).hlt().build());
    ctx.cpu.ram_write(0xF4, 0x99);
    assert!(ctx.run().is_ok());
    assert_eq!(ctx.reg(0), 0x99);
    assert_eq!(ctx.cpu.regs.sp(), 0xF5);
}

#[test]
fn test_push_wraps_stack_pointer_below_zero() {
    let mut config = Config::default();
    config.execution.initial_sp = 0;
    let program = ProgramBuilder::new().ldi(0, 0x42).push(0).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_bytes(&program);
    assert!(ctx.run().is_ok());
    assert_eq!(ctx.cpu.regs.sp(), 0xFF);
    assert_eq!(ctx.cpu.ram_read(0xFF), 0x42);
}

#[test]
fn test_push_sp_stores_decremented_value() {
    let mut ctx = TestContext::new().load_bytes(&ProgramBuilder::new().push(7).hlt().build());
    assert!(ctx.run().is_ok());
    assert_eq!(ctx.cpu.ram_read(0xF3), 0xF3);
}

/// Layout: main at 0, subroutine doubling R0 at 11.
fn call_program() -> Vec<u8> {
    ProgramBuilder::new()
        .ldi(1, 11)
        .ldi(0, 10)
        .call(1)
        .prn(0)
        .hlt()
        .add(0, 0)
        .ret()
        .build()
}

#[test]
fn test_call_pushes_return_address_and_jumps() {
    let mut ctx = TestContext::new().load_bytes(&call_program());
    for _ in 0..3 {
        assert!(ctx.cpu.step().is_ok());
    }
    assert_eq!(ctx.cpu.pc, 11);
    assert_eq!(ctx.cpu.regs.sp(), 0xF3);
    assert_eq!(ctx.cpu.ram_read(0xF3), 8);
}

#[test]
fn test_ret_resumes_after_call() {
    let mut ctx = TestContext::new().load_bytes(&call_program());
    assert!(ctx.run().is_ok());
    assert_eq!(ctx.output(), &[20]);
    assert_eq!(ctx.cpu.regs.sp(), 0xF4);
    assert_eq!(ctx.cpu.pc, 10);
}

#[test]
fn test_nested_calls() {
    // main: CALL outer; PRN R0; HLT. outer: CALL inner; ADD R0,R0; RET. inner: LDI R0,3; RET.
    let program = ProgramBuilder::new()
        .ldi(1, 12)
        .ldi(2, 18)
        .call(1)
        .prn(0)
        .hlt()
        .byte(0)
        .call(2)
        .add(0, 0)
        .ret()
        .ldi(0, 3)
        .ret()
        .build();
    assert_eq!(program[12], ls8_core::isa::ls8::opcodes::CALL);
    assert_eq!(program[18], ls8_core::isa::ls8::opcodes::LDI);

    let mut ctx = TestContext::new().load_bytes(&program);
    assert!(ctx.run().is_ok());
    assert_eq!(ctx.output(), &[6]);
    assert_eq!(ctx.cpu.regs.sp(), 0xF4);
}
