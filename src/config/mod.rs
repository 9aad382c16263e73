//! Project configuration.
//!
//! Settings are layered lowest to highest: built-in defaults, the optional
//! `<project>/.pr.yml`, environment variables (`PR_DIR`, `RUST_LOG`,
//! `NO_COLOR`), then command-line flags.
//!
//! # Example
//!
//! ```
//! use project_runner::config::load_config;
//! use project_runner::detection::ScriptRole;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".pr.yml"), "roles:\n  start: [start, serve]\n").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.role_patterns().get(ScriptRole::Start), &["start", "serve"]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, CONFIG_FILE};
pub use schema::{RoleOverrides, RunnerConfig};
