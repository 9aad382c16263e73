//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::error::{Result, RunnerError};

use super::Prompt;

/// Convert dialoguer errors to RunnerError.
fn map_dialoguer_err(e: dialoguer::Error) -> RunnerError {
    RunnerError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Show a select prompt on `term`.
///
/// Returns the selected option's value, or an empty string when the user
/// dismissed the prompt.
pub fn prompt_select(prompt: &Prompt, term: &Term) -> Result<String> {
    let labels: Vec<_> = prompt.options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| prompt.options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on_opt(term)
        .map_err(map_dialoguer_err)?;

    Ok(selection
        .and_then(|i| prompt.options.get(i))
        .map(|o| o.value.clone())
        .unwrap_or_default())
}
