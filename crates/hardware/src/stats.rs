//! Execution statistics collection and reporting.
//!
//! This module tracks what the engine did during a run. It provides:
//! 1. **Progress:** Steps taken and instructions retired.
//! 2. **Instruction mix:** Retired counts per mnemonic.
//! 3. **Output and faults:** Values emitted by PRN and undefined opcodes skipped.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::isa::Instruction;

/// Counters collected by the execution engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecStats {
    /// Calls to `step` that fetched a byte (halted no-op steps excluded).
    pub steps: u64,
    /// Instructions that executed to completion.
    pub instructions_retired: u64,
    /// Retired instruction counts keyed by mnemonic.
    pub instruction_mix: BTreeMap<&'static str, u64>,
    /// Values handed to the output sink.
    pub values_emitted: u64,
    /// Undefined opcodes skipped under the `skip` policy.
    pub unknown_skipped: u64,
}

impl ExecStats {
    /// Records one retired instruction.
    pub fn record(&mut self, inst: Instruction) {
        self.instructions_retired += 1;
        *self.instruction_mix.entry(inst.mnemonic()).or_insert(0) += 1;
    }

    /// Retired count for one instruction kind.
    pub fn count(&self, inst: Instruction) -> u64 {
        self.instruction_mix
            .get(inst.mnemonic())
            .copied()
            .unwrap_or(0)
    }

    /// Serializes the counters as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
