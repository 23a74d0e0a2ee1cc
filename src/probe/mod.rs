//! External tool invocation.
//!
//! Every checklist probe and every setup step goes through the [`ToolProbe`]
//! trait so that command execution can be scripted in tests without touching
//! the host system.

pub mod command;
pub mod mock;

pub use command::{extract_version, ProbeOutput, SystemProbe, ToolProbe};
pub use mock::ScriptedProbe;
