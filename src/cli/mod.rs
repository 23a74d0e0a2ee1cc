//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, SetupArgs, VerifyArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
