//! Role commands: `run`, `test`, `build` and `start`.

use crate::availability::ensure_available;
use crate::cli::args::InstallMode;
use crate::context::RunContext;
use crate::detection::{
    DependencyStatus, PackageManager, ProjectSnapshot, ScriptRole, ScriptsInfo,
};
use crate::error::{Result, RunnerError};
use crate::shell::{run_interactive, CommandSpec};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::describe_manager;

/// Runs the script detected for a role.
pub struct RunCommand {
    ctx: RunContext,
    role: ScriptRole,
    install: InstallMode,
    args: Vec<String>,
}

impl RunCommand {
    pub fn new(ctx: RunContext, role: ScriptRole, install: InstallMode, args: Vec<String>) -> Self {
        Self {
            ctx,
            role,
            install,
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = analyze_project(&self.ctx, ui)?;
        let scripts = require_scripts(&project)?;

        let script = scripts
            .script_for(self.role)
            .ok_or_else(|| RunnerError::RoleNotFound {
                role: self.role.as_str().to_string(),
                available: scripts.names(),
            })?
            .to_string();
        ui.detail(&format!("Using script '{}' for {}", script, self.role.as_str()));

        let manager = resolve_manager(&mut self.ctx, &project, ui)?;
        install_dependencies(&self.ctx, &project.dependencies, manager, self.install, ui)?;
        run_script(&self.ctx, manager, &script, &self.args, ui)
    }
}

/// Analyze the project, failing when the directory is not a Node project.
pub(super) fn analyze_project(
    ctx: &RunContext,
    ui: &mut dyn UserInterface,
) -> Result<ProjectSnapshot> {
    ui.detail("Analyzing project...");
    let project = ctx.analyze();

    if project.is_unknown() {
        return Err(RunnerError::ProjectNotFound {
            path: ctx.project_root.clone(),
        });
    }

    ui.detail(&format!("Project type: {}", project.kind));
    ui.detail(&format!(
        "Package manager: {}",
        describe_manager(&project.package_manager)
    ));
    Ok(project)
}

pub(super) fn require_scripts(project: &ProjectSnapshot) -> Result<&ScriptsInfo> {
    project.scripts.as_ref().ok_or(RunnerError::NoScripts)
}

/// Make sure the detected package manager can be invoked, possibly
/// substituting npm.
pub(super) fn resolve_manager(
    ctx: &mut RunContext,
    project: &ProjectSnapshot,
    ui: &mut dyn UserInterface,
) -> Result<PackageManager> {
    let resolution = ensure_available(
        project.package_manager.name,
        &mut ctx.availability,
        ui,
        &ctx.resolver,
    )?;
    tracing::debug!("Package manager resolution: {:?}", resolution);
    Ok(resolution.manager())
}

/// Install dependencies when forced, or when stale and not skipped.
pub(super) fn install_dependencies(
    ctx: &RunContext,
    status: &DependencyStatus,
    manager: PackageManager,
    mode: InstallMode,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    match mode {
        InstallMode::Skip => return Ok(()),
        InstallMode::Force => ui.message("Forcing dependency install"),
        InstallMode::WhenStale if status.needs_install => {
            let reason = status
                .reason
                .map(|r| r.to_string())
                .unwrap_or_else(|| "dependencies out of date".to_string());
            ui.detail(&format!("Installing dependencies: {}", reason));
        }
        InstallMode::WhenStale => {
            ui.detail("Dependencies up to date");
            return Ok(());
        }
    }

    let spec = CommandSpec::from_argv(&manager.install_command()).cwd(&ctx.project_root);
    ui.command(&spec.to_string());

    let code = run_interactive(&spec, &ctx.foreground)?;
    if code != 0 {
        return Err(RunnerError::InstallFailed { code });
    }

    ui.success("Dependencies installed");
    Ok(())
}

/// Run `script` through `manager` in the foreground.
pub(super) fn run_script(
    ctx: &RunContext,
    manager: PackageManager,
    script: &str,
    args: &[String],
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let spec = CommandSpec::from_argv(&manager.run_command(script, args)).cwd(&ctx.project_root);
    ui.command(&spec.to_string());

    let code = run_interactive(&spec, &ctx.foreground)?;
    if code != 0 {
        return Err(RunnerError::ScriptFailed {
            script: script.to_string(),
            code,
        });
    }

    Ok(CommandResult::success())
}
