//! Command-line interface for `pr`.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions and lenient flag parsing
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, InstallMode, Invocation, ParsedArgs};
pub use commands::{report_error, Command, CommandDispatcher, CommandResult};
