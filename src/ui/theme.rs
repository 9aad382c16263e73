//! Visual theme and styling.

use console::Style;

/// Colors used for terminal output.
#[derive(Debug, Clone)]
pub struct RunnerTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for diagnostic detail lines (cyan).
    pub info: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for echoed commands (dim).
    pub command: Style,
}

impl Default for RunnerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RunnerTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_detail(&self, msg: &str) -> String {
        format!("{} {}", self.info.apply_to("[pr]"), msg)
    }

    /// Format an echoed command line (`> npm run dev`).
    pub fn format_command(&self, cmd: &str) -> String {
        format!("{}", self.command.apply_to(format!("> {}", cmd)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // --no-color disables styling globally
    if !console::colors_enabled() {
        return false;
    }

    console::Term::stdout().is_term()
}
