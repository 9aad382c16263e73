//! Process execution and platform checks.

pub mod command;
pub mod foreground;
pub mod platform;

pub use command::{run_capture, run_interactive, CaptureResult, CommandSpec};
pub use foreground::{install_signal_handler, ForegroundChild};
pub use platform::{can_prompt, is_ci, stdin_is_interactive};
