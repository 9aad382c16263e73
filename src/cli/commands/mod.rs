//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Invocations are routed by [`CommandDispatcher`]:
//! - Role commands (`pr run`, `pr test`, ...) go through [`RunCommand`]
//! - Any other name is looked up verbatim by [`ScriptCommand`]
//! - `info`, `help` and `version` only print

pub mod dispatcher;
pub mod display;
pub mod help;
pub mod info;
pub mod run;
pub mod script;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use display::report_error;
pub use help::{HelpCommand, VersionCommand};
pub use info::InfoCommand;
pub use run::RunCommand;
pub use script::ScriptCommand;
