//! project-runner - zero-config runner for Node projects.
//!
//! `pr` inspects a project directory, works out which package manager it
//! uses and which scripts play the dev/test/build/start roles, installs
//! dependencies when they are stale, and runs the right script.
//!
//! # Modules
//!
//! - [`availability`] - Package manager availability checks and fallbacks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.pr.yml` project configuration
//! - [`context`] - Per-invocation state shared by commands
//! - [`detection`] - Package manager, script and dependency detection
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Child process execution and signal forwarding
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use project_runner::detection::{ProjectDetector, RolePatterns, ScriptRole};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(
//!     dir.path().join("package.json"),
//!     r#"{ "scripts": { "dev": "vite", "test:unit": "vitest" } }"#,
//! )
//! .unwrap();
//!
//! let project = ProjectDetector::analyze(dir.path(), &RolePatterns::default());
//! let scripts = project.scripts.unwrap();
//! assert_eq!(scripts.script_for(ScriptRole::Dev), Some("dev"));
//! assert_eq!(scripts.script_for(ScriptRole::Test), Some("test:unit"));
//! ```

pub mod availability;
pub mod cli;
pub mod config;
pub mod context;
pub mod detection;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, RunnerError};
