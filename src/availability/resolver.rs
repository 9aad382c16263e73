//! Fallback negotiation when the detected package manager is missing.
//!
//! Non-interactive runs fall back to npm silently (with a warning).
//! Interactive runs offer a global install, npm, or aborting.

use crate::availability::checker::AvailabilityChecker;
use crate::detection::PackageManager;
use crate::error::{Result, RunnerError};
use crate::shell::{run_capture, CaptureResult, CommandSpec};
use crate::ui::{Prompt, PromptOption, UserInterface};

/// Prompt key for the missing package manager question.
pub const MISSING_MANAGER_PROMPT: &str = "missing_package_manager";

/// Mockable dependencies for the resolver.
pub struct ResolverContext<'a> {
    /// Globally install a package manager, capturing output.
    pub install_manager: &'a dyn Fn(PackageManager) -> CaptureResult,
}

/// Build the default `ResolverContext` for production use.
pub fn default_context() -> ResolverContext<'static> {
    ResolverContext {
        install_manager: &|manager| {
            run_capture(&CommandSpec::from_argv(&manager.global_install_command()))
        },
    }
}

/// How the package manager was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The requested manager was already available.
    Available(PackageManager),
    /// The requested manager was installed during this run.
    Installed(PackageManager),
    /// npm is used in place of the requested manager.
    Substituted { requested: PackageManager },
}

impl Resolution {
    /// The manager to run commands with.
    pub fn manager(&self) -> PackageManager {
        match self {
            Self::Available(m) | Self::Installed(m) => *m,
            Self::Substituted { .. } => PackageManager::Npm,
        }
    }
}

/// Make sure `manager` can be executed, negotiating a fallback if not.
pub fn ensure_available(
    manager: PackageManager,
    checker: &mut AvailabilityChecker,
    ui: &mut dyn UserInterface,
    ctx: &ResolverContext<'_>,
) -> Result<Resolution> {
    if checker.is_available(manager) {
        return Ok(Resolution::Available(manager));
    }

    ui.warning(&format!("{} is not installed", manager));

    if !ui.is_interactive() {
        ui.warning(&format!(
            "Non-interactive environment, falling back to npm instead of {}",
            manager
        ));
        return Ok(Resolution::Substituted { requested: manager });
    }

    let prompt = Prompt {
        key: MISSING_MANAGER_PROMPT.to_string(),
        question: format!(
            "This project uses {}, but it is not installed. What would you like to do?",
            manager
        ),
        options: vec![
            PromptOption::new(
                format!("Install {} ({})", manager, manager.global_install_command().join(" ")),
                "install",
            ),
            PromptOption::new("Use npm instead", "npm"),
            PromptOption::new("Abort and install it manually", "abort"),
        ],
        default: Some("abort".to_string()),
    };

    match ui.prompt(&prompt)?.as_str() {
        "install" => install_manager(manager, checker, ui, ctx),
        "npm" => {
            ui.warning(&format!("Using npm instead of {}", manager));
            Ok(Resolution::Substituted { requested: manager })
        }
        _ => Err(RunnerError::ManagerUnavailable {
            manager: manager.to_string(),
        }),
    }
}

fn install_manager(
    manager: PackageManager,
    checker: &mut AvailabilityChecker,
    ui: &mut dyn UserInterface,
    ctx: &ResolverContext<'_>,
) -> Result<Resolution> {
    let mut spinner = ui.start_spinner(&format!("Installing {}...", manager));
    let result = (ctx.install_manager)(manager);

    if !result.success() {
        spinner.finish_error(&format!("Failed to install {}", manager));
        let stderr = result.stderr().trim();
        if !stderr.is_empty() {
            ui.error(stderr);
        }
        return Err(RunnerError::ManagerInstallFailed {
            manager: manager.to_string(),
        });
    }

    spinner.finish_success(&format!("{} installed", manager));

    checker.invalidate(manager);
    if !checker.is_available(manager) {
        return Err(RunnerError::ManagerNotInvocable {
            manager: manager.to_string(),
        });
    }

    Ok(Resolution::Installed(manager))
}
