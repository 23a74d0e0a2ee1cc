//! Tool invocation and output capture.

use std::process::Command;

use crate::error::{KitcheckError, Result};

/// Captured result of invoking an external tool.
#[derive(Debug, Clone)]
pub struct ProbeOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the tool exited with status 0.
    pub success: bool,
}

impl ProbeOutput {
    /// Create a success output.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// Create a failure output.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Trait for spawning external tools and capturing their output.
///
/// Spawning is the only hard failure: a tool that runs but exits non-zero
/// still produces an `Ok` output, and the caller decides what the exit
/// status means.
pub trait ToolProbe {
    /// Invoke `program` with `args`, capturing stdout, stderr and exit status.
    fn capture(&self, program: &str, args: &[&str]) -> Result<ProbeOutput>;
}

/// Probe implementation that spawns real processes.
#[derive(Debug, Default)]
pub struct SystemProbe;

impl ToolProbe for SystemProbe {
    fn capture(&self, program: &str, args: &[&str]) -> Result<ProbeOutput> {
        tracing::debug!("probing: {} {}", program, args.join(" "));

        let output =
            Command::new(program)
                .args(args)
                .output()
                .map_err(|_| KitcheckError::ToolNotFound {
                    tool: program.to_string(),
                })?;

        Ok(ProbeOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}

/// Extract a version number from tool output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
