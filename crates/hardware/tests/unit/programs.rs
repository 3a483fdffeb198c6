//! # Sample Program Runs
//!
//! Runs every program in the workspace `programs/` directory from disk and
//! checks its printed output.

use std::path::PathBuf;

use crate::common::harness::init_tracing;
use ls8_core::Cpu;
use ls8_core::isa::Instruction;
use ls8_core::soc::WriterSink;
use rstest::rstest;

fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}

#[rstest]
#[case("print8.ls8", &[8])]
#[case("mult.ls8", &[72])]
#[case("stack.ls8", &[3, 2, 1])]
#[case("call.ls8", &[20, 30])]
fn sample_program_output(#[case] name: &str, #[case] expected: &[u8]) {
    init_tracing();
    let mut cpu: Cpu = Cpu::default();
    assert!(cpu.load_file(program_path(name)).is_ok());
    assert!(cpu.run_for(1_000).is_ok());
    assert_eq!(cpu.output().as_slice(), expected);
    assert_eq!(cpu.regs.sp(), 0xF4);
}

#[test]
fn call_program_statistics() {
    let mut cpu: Cpu = Cpu::default();
    assert!(cpu.load(include_str!("../../../../programs/call.ls8").as_bytes()).is_ok());
    assert!(cpu.run().is_ok());
    assert_eq!(cpu.stats.count(Instruction::Call), 2);
    assert_eq!(cpu.stats.count(Instruction::Ret), 2);
    assert_eq!(cpu.stats.count(Instruction::Add), 2);
    assert_eq!(cpu.stats.values_emitted, 2);
}

#[test]
fn console_sink_prints_decimal_lines() {
    let mut cpu = Cpu::new(WriterSink::new(Vec::new()));
    assert!(cpu.load_file(program_path("stack.ls8")).is_ok());
    assert!(cpu.run().is_ok());
    assert_eq!(cpu.into_output().into_inner(), b"3\n2\n1\n");
}
