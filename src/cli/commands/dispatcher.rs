//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, DoctorArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for fatal configuration errors.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given distribution root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the distribution root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand, `doctor` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Doctor(args)) => {
                let cmd = super::doctor::DoctorCommand::new(&self.root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Modules(args)) => {
                let cmd = super::modules::ModulesCommand::new(&self.root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::doctor::DoctorCommand::new(&self.root, DoctorArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(EXIT_CONFIG_ERROR);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.root(), Path::new("/test"));
    }

    #[test]
    fn no_subcommand_runs_doctor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("init.yml"), "").unwrap();
        let cli = Cli::parse_from(["moddoctor"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();
        assert!(result.success);
        assert!(ui.has_success("Everything seems fine"));
    }
}
