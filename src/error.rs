//! Error types for project-runner operations.
//!
//! This module defines [`RunnerError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Detection never produces errors; unreadable manifests degrade to defaults
//! - Use `RunnerError` for user-facing failures that end the invocation
//! - Use `anyhow::Error` (via `RunnerError::Other`) for unexpected errors
//! - Every error maps to a process exit code through [`RunnerError::exit_code`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for project-runner operations.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// No `package.json` in the target directory.
    #[error("No project detected in {path} (package.json not found)")]
    ProjectNotFound { path: PathBuf },

    /// The manifest has no usable scripts table.
    #[error("Unable to read scripts from package.json")]
    NoScripts,

    /// No script matched the requested role.
    #[error("No {role} script found")]
    RoleNotFound {
        role: String,
        available: Vec<String>,
    },

    /// The requested script is not defined in the manifest.
    #[error("Script \"{name}\" not found")]
    ScriptNotFound {
        name: String,
        available: Vec<String>,
    },

    /// The script ran and exited non-zero.
    #[error("Script \"{script}\" exited with code {code}")]
    ScriptFailed { script: String, code: i32 },

    /// Dependency installation exited non-zero.
    #[error("Dependency install failed with exit code {code}")]
    InstallFailed { code: i32 },

    /// A program could not be started at all.
    #[error("Failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// The package manager is missing and could not be installed.
    #[error("Unable to install {manager}. Run manually: npm install -g {manager}")]
    ManagerInstallFailed { manager: String },

    /// The package manager was installed but still cannot be invoked.
    #[error("{manager} was installed but cannot be executed. Check your PATH or reopen the terminal and retry.")]
    ManagerNotInvocable { manager: String },

    /// The user chose to abort instead of resolving a missing package manager.
    #[error("Please install {manager} first: npm install -g {manager}")]
    ManagerUnavailable { manager: String },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunnerError {
    /// Process exit code for this error.
    ///
    /// Child process failures pass their own exit code through unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ScriptFailed { code, .. } | Self::InstallFailed { code } => *code,
            _ => 1,
        }
    }

    /// Whether this error only carries a script's own exit status. The
    /// script has already reported its failure on the terminal.
    pub fn is_child_exit(&self) -> bool {
        matches!(self, Self::ScriptFailed { .. })
    }

    /// Script names worth listing alongside this error, if any.
    pub fn available_scripts(&self) -> Option<&[String]> {
        match self {
            Self::RoleNotFound { available, .. } | Self::ScriptNotFound { available, .. } => {
                Some(available)
            }
            _ => None,
        }
    }
}

/// Result type alias for project-runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
