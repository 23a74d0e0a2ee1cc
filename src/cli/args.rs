//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::checks::DEFAULT_ENV_NAME;

/// Kitcheck - Course environment setup checking and verification.
#[derive(Debug, Parser)]
#[command(name = "kitcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the environment checklist (default if no command specified)
    Check(CheckArgs),

    /// Verify captured checklist output against the expected contract
    Verify(VerifyArgs),

    /// Create or update the course conda environment
    Setup(SetupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Expected conda environment name
    #[arg(short, long, default_value = DEFAULT_ENV_NAME)]
    pub name: String,

    /// Username for the greeting (defaults to $STUDENT_USERNAME)
    #[arg(long)]
    pub username: Option<String>,

    /// Override the active environment read from the shell
    #[arg(long, hide = true)]
    pub active_env: Option<String>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            name: DEFAULT_ENV_NAME.to_string(),
            username: None,
            active_env: None,
        }
    }
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VerifyArgs {
    /// Captured output to verify: a notebook (.ipynb) or a plain-text log
    #[arg(default_value = "setup-checker.ipynb")]
    pub file: PathBuf,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetupArgs {
    /// Your 6+2 username
    #[arg(short, long, env = "STUDENT_USERNAME", value_parser = parse_username)]
    pub username: String,

    /// Environment spec file
    #[arg(short, long, default_value = "environment.yml")]
    pub file: PathBuf,

    /// Skip the confirmation prompt when updating an existing environment
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_username(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.len() >= 3 {
        Ok(trimmed.to_string())
    } else {
        Err("username must be at least 3 characters (6+2 format)".to_string())
    }
}
