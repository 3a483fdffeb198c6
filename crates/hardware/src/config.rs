//! Configuration system for the LS-8 machine.
//!
//! This module defines the configuration structures used to parameterize the
//! execution engine. It provides:
//! 1. **Defaults:** Reset values and policies matching the base machine.
//! 2. **Structures:** General (tracing, step bound) and execution (fault policy, reset) settings.
//! 3. **Enums:** The policy applied when an undefined opcode is fetched.
//!
//! Configuration is supplied as JSON (`Config::from_json` / `Config::from_file`),
//! or use `Config::default()`. Every field is optional in JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants for the machine.
mod defaults {
    /// Reset value of the stack pointer register `R7`.
    pub const INITIAL_SP: u8 = crate::common::constants::INITIAL_SP;
}

/// Root configuration type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Execution engine policies and reset values.
    #[serde(default)]
    pub execution: ExecutionConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Log a trace line (PC, next three bytes, registers) before every step.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Upper bound on steps for `Cpu::run`. `None` runs until HLT.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Execution engine policies and reset values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecutionConfig {
    /// What to do when an undefined opcode is fetched.
    #[serde(default)]
    pub unknown_instruction: UnknownInstructionPolicy,

    /// Reset value of the stack pointer register.
    #[serde(default = "ExecutionConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl ExecutionConfig {
    /// Returns the default stack pointer reset value.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            unknown_instruction: UnknownInstructionPolicy::default(),
            initial_sp: defaults::INITIAL_SP,
        }
    }
}

/// Policy for undefined opcodes.
///
/// Either way the condition is reported: as an error under `Halt`, as a
/// `Skipped` step outcome and a warning under `Skip`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownInstructionPolicy {
    /// Halt the machine with PC left on the offending byte.
    #[default]
    Halt,
    /// Advance PC past the byte and the operands its top bits announce, then continue.
    Skip,
}
