//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use project_runner::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("missing_package_manager", "npm");
//!
//! ui.message("Running dev");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Running dev"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    details: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    spinner_results: Rc<RefCell<Vec<SpinnerResult>>>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Detail lines, recorded whatever the output mode.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Command lines echoed before running.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each spinner was finished, in order.
    pub fn spinner_results(&self) -> Vec<SpinnerResult> {
        self.spinner_results.borrow().clone()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_detail(&self, msg: &str) -> bool {
        self.details.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn command(&mut self, cmd: &str) {
        self.commands.push(cmd.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(response.clone());
        }

        Ok(prompt.default.clone().unwrap_or_default())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            results: Rc::clone(&self.spinner_results),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
}

/// A finished spinner as recorded by [`MockUI`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerResult {
    pub status: SpinnerStatus,
    pub message: String,
}

/// Spinner handed out by [`MockUI`]; reports back when finished.
#[derive(Debug)]
pub struct MockSpinner {
    results: Rc<RefCell<Vec<SpinnerResult>>>,
}

impl MockSpinner {
    fn record(&mut self, status: SpinnerStatus, msg: &str) {
        self.results.borrow_mut().push(SpinnerResult {
            status,
            message: msg.to_string(),
        });
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.record(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.record(SpinnerStatus::Error, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn select_prompt(default: Option<&str>) -> Prompt {
        Prompt {
            key: "choice".to_string(),
            question: "Pick".to_string(),
            options: vec![PromptOption::new("A", "a"), PromptOption::new("B", "b")],
            default: default.map(String::from),
        }
    }

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.detail("Project type: nodejs");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.command("npm run dev");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.details(), &["Project type: nodejs"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.commands(), &["npm run dev"]);
    }

    #[test]
    fn mock_ui_returns_configured_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("choice", "b");

        assert_eq!(ui.prompt(&select_prompt(None)).unwrap(), "b");
        assert_eq!(ui.prompts_shown(), &["choice"]);
    }

    #[test]
    fn mock_ui_falls_back_to_default() {
        let mut ui = MockUI::new();

        assert_eq!(ui.prompt(&select_prompt(Some("a"))).unwrap(), "a");
        assert_eq!(ui.prompt(&select_prompt(None)).unwrap(), "");
    }

    #[test]
    fn mock_ui_interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());

        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn mock_ui_records_spinner_outcomes() {
        let mut ui = MockUI::new();

        ui.start_spinner("Installing pnpm...")
            .finish_error("install failed");
        ui.start_spinner("Installing yarn...")
            .finish_success("yarn installed");

        assert_eq!(ui.spinners(), &["Installing pnpm...", "Installing yarn..."]);
        assert_eq!(
            ui.spinner_results(),
            vec![
                SpinnerResult {
                    status: SpinnerStatus::Error,
                    message: "install failed".to_string(),
                },
                SpinnerResult {
                    status: SpinnerStatus::Success,
                    message: "yarn installed".to_string(),
                },
            ]
        );
    }
}
