//! Simulation utilities and program loading.
//!
//! Provides the loader that turns textual program source into RAM contents.

pub mod loader;
