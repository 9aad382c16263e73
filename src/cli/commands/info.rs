//! `pr info`: read-only project report.

use crate::context::RunContext;
use crate::detection::{DependencyStatus, ScriptRole};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{describe_manager, truncate_command, MAX_COMMAND_WIDTH};

/// Prints what was detected about the project.
pub struct InfoCommand {
    ctx: RunContext,
}

impl InfoCommand {
    pub fn new(ctx: RunContext) -> Self {
        Self { ctx }
    }
}

impl Command for InfoCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.ctx.analyze();

        if project.is_unknown() {
            ui.error("No project detected");
            ui.message("  Make sure the directory contains a package.json");
            return Ok(CommandResult::success());
        }

        ui.show_header("pr - project info");
        ui.message(&"─".repeat(40));

        if let Some(name) = &project.name {
            ui.message(&format!("Name:            {}", name));
        }
        if let Some(version) = &project.version {
            ui.message(&format!("Version:         {}", version));
        }
        if let Some(description) = &project.description {
            ui.message(&format!("Description:     {}", description));
        }
        ui.message(&format!("Project type:    {}", project.kind));
        ui.message(&format!(
            "Package manager: {}",
            describe_manager(&project.package_manager)
        ));
        ui.message(&format!(
            "Dependencies:    {}",
            dependency_summary(&project.dependencies)
        ));
        ui.message("");

        if let Some(scripts) = &project.scripts {
            let manager = project.package_manager.name;

            ui.message("Detected commands:");
            for role in ScriptRole::ALL {
                if let Some(script) = scripts.detected.get(role) {
                    ui.message(&format!(
                        "  pr {:<5} → {}",
                        role.command_name(),
                        manager.run_command(script, &[]).join(" ")
                    ));
                }
            }
            ui.message("");

            if !scripts.is_empty() {
                ui.message("Scripts:");
                for (name, command) in &scripts.scripts {
                    ui.message(&format!(
                        "  {} → {}",
                        name,
                        truncate_command(command, MAX_COMMAND_WIDTH)
                    ));
                }
                ui.message("");
            }
        }

        Ok(CommandResult::success())
    }
}

fn dependency_summary(status: &DependencyStatus) -> String {
    if !status.needs_install {
        return "ready".to_string();
    }
    match status.reason {
        Some(reason) => format!("needs install ({})", reason),
        None => "needs install".to_string(),
    }
}
