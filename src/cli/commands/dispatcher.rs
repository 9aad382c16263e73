//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing an [`Invocation`] to its command

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Invocation};
use crate::context::RunContext;
use crate::error::Result;
use crate::shell::ForegroundChild;
use crate::ui::UserInterface;

use super::help::{HelpCommand, VersionCommand};
use super::info::InfoCommand;
use super::run::RunCommand;
use super::script::ScriptCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
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

/// Dispatches CLI invocations to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    foreground: ForegroundChild,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root. `foreground` is
    /// the handle shared with the signal handler.
    pub fn new(project_root: PathBuf, foreground: ForegroundChild) -> Self {
        Self {
            project_root,
            foreground,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Help and version never touch the project directory; everything else
    /// loads the project configuration first.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let invocation = cli.invocation();
        let install = cli.install_mode(&invocation);
        tracing::debug!("Dispatching {:?} with install mode {:?}", invocation, install);

        match invocation {
            Invocation::Help => HelpCommand.execute(ui),
            Invocation::Version => VersionCommand.execute(ui),
            Invocation::Info => InfoCommand::new(self.context()?).execute(ui),
            Invocation::Role(role) => {
                RunCommand::new(self.context()?, role, install, cli.args.clone()).execute(ui)
            }
            Invocation::Script(name) => {
                ScriptCommand::new(self.context()?, name, install, cli.args.clone()).execute(ui)
            }
        }
    }

    fn context(&self) -> Result<RunContext> {
        RunContext::load(&self.project_root, self.foreground.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnerError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let argv = std::iter::once("pr").chain(args.iter().copied());
        Cli::parse_lenient(argv).unwrap().cli
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(3);
        assert!(!result.success);
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"), ForegroundChild::new());
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn help_ignores_broken_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".pr.yml"), "nope: [").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), ForegroundChild::new());
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli(&["help"]), &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Usage"));
    }

    #[test]
    fn broken_config_fails_project_commands() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".pr.yml"), "nope: [").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), ForegroundChild::new());
        let mut ui = MockUI::new();

        let err = dispatcher.dispatch(&cli(&["info"]), &mut ui).unwrap_err();

        assert!(matches!(err, RunnerError::ConfigParse { .. }));
    }

    #[test]
    fn missing_role_reports_available_scripts() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "scripts": { "dev": "vite", "lint": "eslint ." } }"#,
        )
        .unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), ForegroundChild::new());
        let mut ui = MockUI::new();

        let err = dispatcher.dispatch(&cli(&["test"]), &mut ui).unwrap_err();

        assert!(matches!(err, RunnerError::RoleNotFound { .. }));
        assert_eq!(
            err.available_scripts(),
            Some(&["dev".to_string(), "lint".to_string()][..])
        );
    }
}
