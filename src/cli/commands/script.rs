//! Arbitrary script execution: `pr <script>`.

use crate::cli::args::InstallMode;
use crate::context::RunContext;
use crate::error::{Result, RunnerError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::run::{
    analyze_project, install_dependencies, require_scripts, resolve_manager, run_script,
};

/// Runs a script by its exact name.
pub struct ScriptCommand {
    ctx: RunContext,
    name: String,
    install: InstallMode,
    args: Vec<String>,
}

impl ScriptCommand {
    pub fn new(ctx: RunContext, name: String, install: InstallMode, args: Vec<String>) -> Self {
        Self {
            ctx,
            name,
            install,
            args,
        }
    }
}

impl Command for ScriptCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = analyze_project(&self.ctx, ui)?;
        let scripts = require_scripts(&project)?;

        if !scripts.has_script(&self.name) {
            return Err(RunnerError::ScriptNotFound {
                name: self.name.clone(),
                available: scripts.names(),
            });
        }
        if let Some(command) = scripts.command(&self.name) {
            ui.detail(&format!("Script '{}': {}", self.name, command));
        }

        let manager = resolve_manager(&mut self.ctx, &project, ui)?;
        install_dependencies(&self.ctx, &project.dependencies, manager, self.install, ui)?;
        run_script(&self.ctx, manager, &self.name, &self.args, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;
    use crate::shell::ForegroundChild;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn command(root: &std::path::Path, name: &str) -> ScriptCommand {
        let ctx = RunContext::new(root, RunnerConfig::default(), ForegroundChild::new());
        ScriptCommand::new(ctx, name.to_string(), InstallMode::Skip, vec![])
    }

    #[test]
    fn unknown_script_lists_available() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "scripts": { "lint": "eslint .", "format": "prettier -w ." } }"#,
        )
        .unwrap();
        let mut ui = MockUI::new();

        let err = command(temp.path(), "deploy").execute(&mut ui).unwrap_err();

        match err {
            RunnerError::ScriptNotFound { name, available } => {
                assert_eq!(name, "deploy");
                assert_eq!(available, vec!["lint", "format"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn script_names_are_case_sensitive() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "scripts": { "Lint": "eslint ." } }"#,
        )
        .unwrap();
        let mut ui = MockUI::new();

        let err = command(temp.path(), "lint").execute(&mut ui).unwrap_err();

        assert!(matches!(err, RunnerError::ScriptNotFound { .. }));
    }

    #[test]
    fn unknown_project_is_fatal() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = command(temp.path(), "lint").execute(&mut ui).unwrap_err();

        assert!(matches!(err, RunnerError::ProjectNotFound { .. }));
    }
}
