//! Verify command implementation.
//!
//! The `kitcheck verify` command reads previously captured checklist output
//! and validates it against the expected contract. A `.ipynb` path goes
//! through the notebook adapter; any other path is read verbatim as a
//! plain-text log.

use std::fs;
use std::path::Path;

use console::style;

use crate::cli::args::VerifyArgs;
use crate::error::{KitcheckError, Result};
use crate::notebook;
use crate::verify::{verify_output, VerificationFailure};

use super::dispatcher::{Command, CommandResult};

/// The verify command implementation.
pub struct VerifyCommand {
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(args: VerifyArgs) -> Self {
        Self { args }
    }

    fn load_blob(&self, path: &Path) -> Result<String> {
        let is_notebook = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("ipynb"))
            .unwrap_or(false);

        if is_notebook {
            notebook::extract_output(path)
        } else if !path.exists() {
            Err(KitcheckError::OutputFileNotFound {
                path: path.to_path_buf(),
            })
        } else {
            Ok(fs::read_to_string(path)?)
        }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, quiet: bool) -> Result<CommandResult> {
        let blob = self.load_blob(&self.args.file)?;

        if !quiet {
            println!("📋 Captured output:");
            println!("{}", style("-".repeat(50)).dim());
            println!("{}", blob);
            println!("{}", style("-".repeat(50)).dim());
        }

        let report = verify_output(&blob);

        if let Some(greeting) = &report.greeting {
            println!("✅ Found greeting: {}", greeting);
        }
        if report
            .failures
            .iter()
            .all(|f| !matches!(f, VerificationFailure::MarkerCountMismatch { .. }))
        {
            println!("✅ Found {} success markers", report.marker_count);
        }

        for failure in &report.failures {
            match failure {
                VerificationFailure::MissingPatterns { patterns } => {
                    println!("🚨 Missing expected output patterns:");
                    for pattern in patterns {
                        println!("   - {}", pattern);
                    }
                }
                other => println!("🚨 {}", other),
            }
        }

        if report.passed() {
            println!("{}", style("🎉 All checks passed!").bold());
            Ok(CommandResult::success())
        } else {
            println!("{}", style("💥 Verification failed").bold());
            Ok(CommandResult::failure(1))
        }
    }
}
