//! Error types for kitcheck operations.
//!
//! This module defines [`KitcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `KitcheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `KitcheckError::Other`) for unexpected errors
//! - Probe failures inside the check suite are recovered locally and rendered
//!   as failure lines; they never abort a checklist run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kitcheck operations.
#[derive(Debug, Error)]
pub enum KitcheckError {
    /// An external tool could not be spawned (not installed or not on PATH).
    #[error("Tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external command ran but exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Captured output file (notebook or plain log) does not exist.
    #[error("Captured output not found: {path}")]
    OutputFileNotFound { path: PathBuf },

    /// The notebook document could not be parsed as the expected format.
    #[error("Failed to parse notebook at {path}: {message}")]
    NotebookParseError { path: PathBuf, message: String },

    /// The environment spec file is missing, unreadable, or invalid.
    #[error("Invalid environment spec at {path}: {message}")]
    EnvSpecError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for kitcheck operations.
pub type Result<T> = std::result::Result<T, KitcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_not_found_displays_tool() {
        let err = KitcheckError::ToolNotFound {
            tool: "conda".into(),
        };
        assert!(err.to_string().contains("conda"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = KitcheckError::CommandFailed {
            command: "conda env create -f environment.yml".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("conda env create"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn output_file_not_found_displays_path() {
        let err = KitcheckError::OutputFileNotFound {
            path: PathBuf::from("/course/setup-checker.ipynb"),
        };
        assert!(err.to_string().contains("setup-checker.ipynb"));
    }

    #[test]
    fn notebook_parse_error_displays_path_and_message() {
        let err = KitcheckError::NotebookParseError {
            path: PathBuf::from("/course/run.ipynb"),
            message: "missing field `cells`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/course/run.ipynb"));
        assert!(msg.contains("missing field `cells`"));
    }

    #[test]
    fn env_spec_error_displays_path_and_message() {
        let err = KitcheckError::EnvSpecError {
            path: PathBuf::from("environment.yml"),
            message: "missing top-level `name:` key".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("environment.yml"));
        assert!(msg.contains("name:"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: KitcheckError = io_err.into();
        assert!(matches!(err, KitcheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(KitcheckError::ToolNotFound {
                tool: "jupyter".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
