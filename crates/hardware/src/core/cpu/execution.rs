//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and the two following bytes as operands.
//! 2. **Decode:** Maps the opcode to an [`Instruction`], applying the unknown-opcode policy.
//! 3. **Execute:** Applies instruction semantics, routing ADD/MUL through the ALU.
//! 4. **Control:** Advances PC by the encoded length unless the instruction set it.
//!
//! Every step completes fully before the next begins. A faulting instruction
//! leaves registers, memory, and PC untouched and halts the machine.

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::RegisterFile;
use crate::common::error::Fault;
use crate::config::UnknownInstructionPolicy;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::soc::traits::OutputSink;

/// Result of a single [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction executed to completion.
    Executed(Instruction),
    /// The machine was already halted; nothing was fetched.
    Halted,
    /// An undefined opcode was skipped under [`UnknownInstructionPolicy::Skip`].
    Skipped {
        /// The offending byte.
        opcode: u8,
        /// Address it was fetched from.
        pc: u8,
    },
}

impl<S: OutputSink> Cpu<S> {
    /// Executes exactly one instruction.
    ///
    /// # Returns
    ///
    /// What happened during the step; see [`StepOutcome`].
    ///
    /// # Errors
    ///
    /// Returns a [`Fault`] if the instruction could not complete. The machine
    /// is halted before the fault is returned.
    pub fn step(&mut self) -> Result<StepOutcome, Fault> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        if self.config.general.trace_instructions {
            trace!(target: "ls8::trace", "{}", self.trace_line());
        }

        self.stats.steps += 1;

        let pc = self.pc;
        let opcode = self.ram.read(pc);
        let operand_a = self.ram.read(pc.wrapping_add(1));
        let operand_b = self.ram.read(pc.wrapping_add(2));

        let Some(inst) = decode(opcode) else {
            return self.unknown_instruction(opcode, pc);
        };

        match self.execute(inst, operand_a, operand_b) {
            Ok(()) => {
                self.stats.record(inst);
                Ok(StepOutcome::Executed(inst))
            }
            Err(fault) => {
                self.halted = true;
                debug!(pc, %inst, %fault, "instruction faulted; halting");
                Err(fault)
            }
        }
    }

    /// Runs until the machine halts.
    ///
    /// If `general.max_steps` is configured, the run is bounded as by
    /// [`run_for`](Self::run_for).
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`] raised, or [`Fault::StepLimitExceeded`]
    /// if the configured bound is reached first.
    pub fn run(&mut self) -> Result<(), Fault> {
        if let Some(limit) = self.config.general.max_steps {
            return self.run_for(limit).map(|_| ());
        }
        while !self.halted {
            let _ = self.step()?;
        }
        Ok(())
    }

    /// Runs until the machine halts or `max_steps` steps have been taken.
    ///
    /// # Returns
    ///
    /// The number of steps taken, including the one that executed HLT.
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`] raised, or [`Fault::StepLimitExceeded`]
    /// if the machine is still running after `max_steps` steps. The machine
    /// is left running in the latter case, so the caller may continue it.
    pub fn run_for(&mut self, max_steps: u64) -> Result<u64, Fault> {
        let mut taken = 0;
        while !self.halted {
            if taken == max_steps {
                return Err(Fault::StepLimitExceeded { limit: max_steps });
            }
            let _ = self.step()?;
            taken += 1;
        }
        Ok(taken)
    }

    /// Executes an ALU operation on two registers, storing the result in `reg_a`.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Opcode byte selecting the operation (`ADD` or `MUL`).
    /// * `reg_a`  - Destination and first source register index.
    /// * `reg_b`  - Second source register index.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidRegister`] for an index outside `R0`-`R7`, or
    /// [`Fault::UnsupportedAluOperation`] for a non-arithmetic opcode. No
    /// register is modified on error.
    pub fn alu(&mut self, opcode: u8, reg_a: u8, reg_b: u8) -> Result<(), Fault> {
        let ra = self.reg_index(reg_a)?;
        let rb = self.reg_index(reg_b)?;
        let result = Alu::execute(opcode, self.regs.read(ra), self.regs.read(rb))?;
        self.regs.write(ra, result);
        Ok(())
    }

    /// Applies the semantics of a decoded instruction.
    fn execute(&mut self, inst: Instruction, operand_a: u8, operand_b: u8) -> Result<(), Fault> {
        let pc = self.pc;
        let next_pc = pc.wrapping_add(inst.opcode().instruction_len());

        match inst {
            Instruction::Ldi => {
                let ra = self.reg_index(operand_a)?;
                self.regs.write(ra, operand_b);
            }
            Instruction::Prn => {
                let ra = self.reg_index(operand_a)?;
                self.output.emit(self.regs.read(ra))?;
                self.stats.values_emitted += 1;
            }
            Instruction::Hlt => {
                self.halted = true;
                debug!(pc, "HLT");
            }
            Instruction::Add | Instruction::Mul => {
                self.alu(inst.opcode(), operand_a, operand_b)?;
            }
            Instruction::Push => {
                let ra = self.reg_index(operand_a)?;
                let sp = self.decrement_sp();
                self.ram.write(sp, self.regs.read(ra));
            }
            Instruction::Pop => {
                let ra = self.reg_index(operand_a)?;
                self.regs.write(ra, self.ram.read(self.regs.sp()));
                self.increment_sp();
            }
            Instruction::Call => {
                let ra = self.reg_index(operand_a)?;
                let return_addr = next_pc;
                let sp = self.decrement_sp();
                self.ram.write(sp, return_addr);
                self.pc = self.regs.read(ra);
            }
            Instruction::Ret => {
                self.pc = self.ram.read(self.regs.sp());
                self.increment_sp();
            }
        }

        if !inst.sets_pc() {
            self.pc = next_pc;
        }
        Ok(())
    }

    /// Applies the configured policy to an undefined opcode.
    fn unknown_instruction(&mut self, opcode: u8, pc: u8) -> Result<StepOutcome, Fault> {
        match self.config.execution.unknown_instruction {
            UnknownInstructionPolicy::Halt => {
                self.halted = true;
                warn!(opcode, pc, "unknown instruction; halting");
                Err(Fault::UnknownInstruction { opcode, pc })
            }
            UnknownInstructionPolicy::Skip => {
                self.stats.unknown_skipped += 1;
                self.pc = pc.wrapping_add(opcode.instruction_len());
                warn!(opcode, pc, next_pc = self.pc, "unknown instruction; skipping");
                Ok(StepOutcome::Skipped { opcode, pc })
            }
        }
    }

    /// Validates an operand byte used as a register index.
    fn reg_index(&self, operand: u8) -> Result<usize, Fault> {
        let idx = usize::from(operand);
        if RegisterFile::is_valid(idx) {
            Ok(idx)
        } else {
            Err(Fault::InvalidRegister {
                index: operand,
                pc: self.pc,
            })
        }
    }
}
