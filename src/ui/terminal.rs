//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_select, should_use_colors, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt,
    RunnerTheme, SpinnerHandle, UserInterface,
};

/// Styled terminal UI. Warnings, errors and prompts go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: RunnerTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI. `interactive` controls whether prompts
    /// may be shown.
    pub fn new(mode: OutputMode, interactive: bool) -> Self {
        let theme = if should_use_colors() {
            RunnerTheme::new()
        } else {
            RunnerTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            interactive,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.out, "{}", self.theme.format_detail(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, cmd: &str) {
        writeln!(self.out, "{}", self.theme.format_command(cmd)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_select(prompt, &self.err)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.err.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            writeln!(self.out, "{}", message).ok();
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Create the appropriate UI based on context.
///
/// The styled UI is used whenever stdout is a terminal or prompts are
/// allowed; anything else gets plain output.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive || Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, interactive))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
