//! Conda environment provisioning.
//!
//! Reads the environment name from a declarative spec file
//! (`environment.yml`), decides between creating and updating the named
//! environment, and records the student username on it via
//! `conda env config vars set`. All conda invocations go through the
//! [`ToolProbe`] trait.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{KitcheckError, Result};
use crate::probe::{ProbeOutput, ToolProbe};

/// Name of the process-level variable recorded on the environment.
pub const USERNAME_VAR: &str = "STUDENT_USERNAME";

/// Top-level keys we care about in an environment spec file.
#[derive(Debug, Deserialize)]
struct EnvSpecFile {
    name: Option<String>,
}

/// A loaded environment spec: the target name plus the file it came from.
#[derive(Debug, Clone)]
pub struct EnvSpec {
    pub name: String,
    pub path: PathBuf,
}

impl EnvSpec {
    /// Load the spec file and pull out the environment name.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| KitcheckError::EnvSpecError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let parsed: EnvSpecFile =
            serde_yaml::from_str(&raw).map_err(|e| KitcheckError::EnvSpecError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let name = parsed.name.ok_or_else(|| KitcheckError::EnvSpecError {
            path: path.to_path_buf(),
            message: "missing top-level `name:` key".to_string(),
        })?;

        Ok(Self {
            name,
            path: path.to_path_buf(),
        })
    }
}

/// Whether the spec will create a fresh environment or update an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvAction {
    Create,
    Update,
}

impl EnvAction {
    /// The conda subcommand verb.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

/// Report the installed conda version (trimmed `conda --version` output).
pub fn conda_version(probe: &dyn ToolProbe) -> Result<String> {
    let output = probe.capture("conda", &["--version"])?;
    Ok(output.stdout.trim().to_string())
}

/// Whether an environment with this name already exists.
///
/// Matches the original setup script: a substring check over
/// `conda env list` output.
pub fn environment_exists(probe: &dyn ToolProbe, name: &str) -> bool {
    probe
        .capture("conda", &["env", "list"])
        .map(|output| output.success && output.stdout.contains(name))
        .unwrap_or(false)
}

/// Create or update the environment from the spec file.
pub fn apply_env_spec(
    probe: &dyn ToolProbe,
    action: EnvAction,
    spec: &EnvSpec,
) -> Result<ProbeOutput> {
    let file = spec.path.to_string_lossy();
    let output = probe.capture("conda", &["env", action.verb(), "-f", file.as_ref()])?;

    if output.success {
        Ok(output)
    } else {
        Err(KitcheckError::CommandFailed {
            command: format!("conda env {} -f {}", action.verb(), file),
            code: output.exit_code,
        })
    }
}

/// Record the student username on the environment.
///
/// Failure here is reported, not fatal: the environment itself is already
/// provisioned, only the greeting variable is missing.
pub fn set_username_var(
    probe: &dyn ToolProbe,
    env_name: &str,
    username: &str,
) -> std::result::Result<(), String> {
    let assignment = format!("{}={}", USERNAME_VAR, username);
    match probe.capture(
        "conda",
        &["env", "config", "vars", "set", &assignment, "-n", env_name],
    ) {
        Ok(output) if output.success => Ok(()),
        Ok(output) => Err(output.stderr.trim().to_string()),
        Err(e) => Err(e.to_string()),
    }
}
