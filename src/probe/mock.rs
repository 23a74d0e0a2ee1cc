//! Scripted probe implementation for testing.
//!
//! `ScriptedProbe` implements the [`ToolProbe`] trait with pre-configured
//! responses keyed by the full command line. Any command without a scripted
//! response behaves as a missing tool.
//!
//! # Example
//!
//! ```
//! use kitcheck::probe::{ProbeOutput, ScriptedProbe, ToolProbe};
//!
//! let mut probe = ScriptedProbe::new();
//! probe.respond("git --version", ProbeOutput::success("git version 2.39.5"));
//!
//! let output = probe.capture("git", &["--version"]).unwrap();
//! assert!(output.stdout.contains("2.39.5"));
//! assert!(probe.capture("jupyter", &["--version"]).is_err());
//! ```

use std::collections::HashMap;

use crate::error::{KitcheckError, Result};

use super::command::{ProbeOutput, ToolProbe};

/// Probe implementation that replays scripted responses.
#[derive(Debug, Default)]
pub struct ScriptedProbe {
    responses: HashMap<String, ProbeOutput>,
}

impl ScriptedProbe {
    /// Create a new probe with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for a full command line (program and arguments
    /// joined by single spaces).
    pub fn respond(&mut self, command_line: &str, output: ProbeOutput) {
        self.responses.insert(command_line.to_string(), output);
    }

    /// Remove a scripted response, making the command behave as a missing
    /// tool again.
    pub fn forget(&mut self, command_line: &str) {
        self.responses.remove(command_line);
    }

    fn command_line(program: &str, args: &[&str]) -> String {
        if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        }
    }
}

impl ToolProbe for ScriptedProbe {
    fn capture(&self, program: &str, args: &[&str]) -> Result<ProbeOutput> {
        let key = Self::command_line(program, args);
        match self.responses.get(&key) {
            Some(output) => Ok(output.clone()),
            None => Err(KitcheckError::ToolNotFound {
                tool: program.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_response_is_replayed() {
        let mut probe = ScriptedProbe::new();
        probe.respond("pip --version", ProbeOutput::success("pip 24.0"));

        let output = probe.capture("pip", &["--version"]).unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "pip 24.0");
    }

    #[test]
    fn unscripted_command_is_a_missing_tool() {
        let probe = ScriptedProbe::new();
        let result = probe.capture("conda", &["--version"]);
        assert!(matches!(
            result,
            Err(KitcheckError::ToolNotFound { ref tool }) if tool == "conda"
        ));
    }

    #[test]
    fn arguments_distinguish_responses() {
        let mut probe = ScriptedProbe::new();
        probe.respond("git --version", ProbeOutput::success("git version 2.39.5"));
        probe.respond(
            "git rev-parse --is-inside-work-tree",
            ProbeOutput::failure(128, "fatal: not a git repository"),
        );

        assert!(probe.capture("git", &["--version"]).unwrap().success);
        assert!(
            !probe
                .capture("git", &["rev-parse", "--is-inside-work-tree"])
                .unwrap()
                .success
        );
    }
}
