//! Check command implementation.
//!
//! The `kitcheck check` command runs the environment checklist. Ambient
//! process state (the student username, the active conda environment) is
//! read here, once, and injected into the suite; flags override the
//! environment for testing and troubleshooting.
//!
//! The checklist itself cannot fail: every probe renders a line and the
//! command exits 0. The rendered lines, not the exit code, are what
//! `kitcheck verify` enforces later.

use crate::checks::{CheckSuite, SuiteConfig};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::probe::SystemProbe;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, _quiet: bool) -> Result<CommandResult> {
        let username = self
            .args
            .username
            .clone()
            .or_else(|| std::env::var("STUDENT_USERNAME").ok());
        let active_env = self
            .args
            .active_env
            .clone()
            .or_else(|| std::env::var("CONDA_DEFAULT_ENV").ok());

        let config = SuiteConfig::new(self.args.name.clone())
            .with_username(username)
            .with_active_env(active_env);

        println!("Checking setup for {}", self.args.name);

        let probe = SystemProbe;
        let suite = CheckSuite::new(config, &probe);
        for line in suite.run() {
            println!("{}", line);
        }

        Ok(CommandResult::success())
    }
}
