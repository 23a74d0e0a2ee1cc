//! Setup command implementation.
//!
//! The `kitcheck setup` command provisions the course conda environment
//! from a declarative spec file and records the student username on it.
//! Creating an environment takes conda minutes, so the long calls run under
//! a spinner; updating an existing environment asks first on a TTY.

use std::time::Duration;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::SetupArgs;
use crate::error::{KitcheckError, Result};
use crate::probe::{extract_version, SystemProbe};
use crate::setup::{
    apply_env_spec, conda_version, environment_exists, set_username_var, EnvAction, EnvSpec,
    USERNAME_VAR,
};

use super::dispatcher::{Command, CommandResult};

/// Convert dialoguer errors to KitcheckError.
fn map_dialoguer_err(e: dialoguer::Error) -> KitcheckError {
    match e {
        dialoguer::Error::IO(io) => KitcheckError::Io(io),
    }
}

/// The setup command implementation.
pub struct SetupCommand {
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(args: SetupArgs) -> Self {
        Self { args }
    }

    fn confirm_update(&self, env_name: &str) -> Result<bool> {
        if self.args.yes || !console::user_attended() {
            return Ok(true);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Environment {} already exists. Update it?", env_name))
            .default(true)
            .interact()
            .map_err(map_dialoguer_err)
    }

    fn print_usage_instructions(&self, env_name: &str) {
        let file = self.args.file.display();
        println!();
        println!("{}", style("=".repeat(50)).dim());
        println!("📋 Usage");
        println!("{}", style("=".repeat(50)).dim());
        println!();
        println!("To activate the environment:");
        println!("  conda activate {}", env_name);
        println!();
        println!("To deactivate:");
        println!("  conda deactivate");
        println!();
        println!("To update the environment later:");
        println!("  conda env update -f {}", file);
        println!();
    }
}

impl Command for SetupCommand {
    fn execute(&self, _quiet: bool) -> Result<CommandResult> {
        println!("👋 Hello, {}!", self.args.username);

        let spec = EnvSpec::load(&self.args.file)?;

        println!("🚀 {} Environment Setup", spec.name);
        println!("{}", style("=".repeat(30)).dim());
        println!(
            "Platform: {} {}",
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        println!();

        let probe = SystemProbe;

        let version = match conda_version(&probe) {
            Ok(v) => v,
            Err(KitcheckError::ToolNotFound { .. }) => {
                println!("🚨 conda is not installed or not in PATH");
                println!("Install Miniconda or Anaconda first.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };
        let display = extract_version(&version).unwrap_or_else(|| version.clone());
        println!("✅ Found conda: {}", display);

        let action = if environment_exists(&probe, &spec.name) {
            if !self.confirm_update(&spec.name)? {
                println!("Setup cancelled.");
                return Ok(CommandResult::success());
            }
            println!("📦 Updating existing {} environment...", spec.name);
            EnvAction::Update
        } else {
            println!("🆕 Creating new {} environment...", spec.name);
            EnvAction::Create
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!("Running conda env {}...", action.verb()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let applied = apply_env_spec(&probe, action, &spec);
        spinner.finish_and_clear();

        match applied {
            Ok(_) => println!("✅ Environment setup complete!"),
            Err(e) => {
                println!("🚨 Error setting up environment:");
                return Err(e);
            }
        }

        println!("🔧 Setting {} to: {}", USERNAME_VAR, self.args.username);
        match set_username_var(&probe, &spec.name, &self.args.username) {
            Ok(()) => println!("✅ {} set on {}", USERNAME_VAR, spec.name),
            Err(message) => {
                println!("⚠️  Warning: could not set {}:", USERNAME_VAR);
                if !message.is_empty() {
                    println!("{}", message);
                }
            }
        }

        self.print_usage_instructions(&spec.name);
        Ok(CommandResult::success())
    }
}
