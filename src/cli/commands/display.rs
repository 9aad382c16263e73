//! Shared display helpers.

use crate::detection::PackageManagerInfo;
use crate::error::RunnerError;
use crate::ui::UserInterface;

/// Longest command text shown in script listings.
pub const MAX_COMMAND_WIDTH: usize = 40;

/// `pnpm@8.6.0 (packageManager)`
pub fn describe_manager(info: &PackageManagerInfo) -> String {
    format!("{} ({})", info.display_name(), info.source)
}

/// Shorten `command` to `max` characters, marking the cut with `...`.
pub fn truncate_command(command: &str, max: usize) -> String {
    if command.chars().count() > max {
        let head: String = command.chars().take(max).collect();
        format!("{}...", head)
    } else {
        command.to_string()
    }
}

/// Print an error and whatever context helps the user recover from it.
pub fn report_error(ui: &mut dyn UserInterface, err: &RunnerError) {
    if err.is_child_exit() {
        ui.detail(&err.to_string());
        return;
    }

    ui.error(&err.to_string());

    let Some(available) = err.available_scripts() else {
        return;
    };

    if available.is_empty() {
        ui.warning("No scripts are defined in package.json");
        return;
    }

    ui.message("");
    ui.message("Available scripts:");
    for name in available {
        ui.message(&format!("  - {}", name));
    }

    if matches!(err, RunnerError::RoleNotFound { .. }) {
        ui.message("");
        ui.message("Run any script with: pr <script>");
    }
}
