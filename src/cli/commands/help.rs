//! `pr help` and `pr version`.

use console::style;

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Version string as printed by `pr version`.
pub fn version_text() -> String {
    format!("pr v{}", env!("CARGO_PKG_VERSION"))
}

/// Full help screen.
pub fn help_text() -> String {
    format!(
        "\
{name} v{version} - zero-config project runner

{usage} pr <command> [options] [-- args...]

{commands}
  run              Detect, install dependencies and start the dev server
  test             Run tests
  build            Build the project
  start            Start in production mode
  info             Show what was detected about the project
  <script>         Run any script from package.json

{options}
  -v, --verbose    Show detection details
  -d, --dir <path> Project directory (default: current directory, env: PR_DIR)
  --no-install     Skip dependency installation
  -i, --install    Force dependency installation
  --debug          Enable debug logging
  --no-color       Disable colored output
  -h, --help       Show this help
  -V, --version    Show the version

{examples}
  pr run             Start the project in one step
  pr run -v          Show detection details
  pr test -- --watch Forward arguments to the test script
  pr lint            Run the lint script
  pr info            Show project information
",
        name = style("pr").cyan(),
        version = env!("CARGO_PKG_VERSION"),
        usage = style("Usage:").bold(),
        commands = style("Commands:").bold(),
        options = style("Options:").bold(),
        examples = style("Examples:").bold(),
    )
}

/// Prints the help screen.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&help_text());
        Ok(CommandResult::success())
    }
}

/// Prints the version.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&version_text());
        Ok(CommandResult::success())
    }
}
