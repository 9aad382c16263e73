//! Process execution.
//!
//! Two modes: interactive runs share the terminal with the child and report
//! its exit code, capture runs buffer output for probes and installs.

use crate::error::{Result, RunnerError};
use crate::shell::foreground::ForegroundChild;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A program invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,

    /// Working directory (inherits the current one when unset).
    pub cwd: Option<PathBuf>,

    /// Environment variables merged over the inherited environment.
    pub env: HashMap<String, String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Build a spec from a full argument vector (`["pnpm", "dev"]`).
    pub fn from_argv(argv: &[String]) -> Self {
        match argv.split_first() {
            Some((program, args)) => Self {
                program: program.clone(),
                args: args.to_vec(),
                ..Default::default()
            },
            None => Self::default(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    fn to_command(&self) -> Command {
        // Package managers ship as .cmd shims on Windows, which only the
        // command interpreter resolves.
        let mut cmd = if cfg!(target_os = "windows") {
            let shell = std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string());
            let mut cmd = Command::new(shell);
            cmd.arg("/C").arg(&self.program);
            cmd
        } else {
            Command::new(&self.program)
        };

        cmd.args(&self.args);

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Outcome of a captured run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureResult {
    /// The process ran to completion. `code` is `None` when it was killed
    /// by a signal.
    Exited {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The process could not be spawned.
    NotStarted { reason: String },
}

impl CaptureResult {
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited { code: Some(0), .. })
    }

    pub fn stdout(&self) -> &str {
        match self {
            Self::Exited { stdout, .. } => stdout,
            Self::NotStarted { .. } => "",
        }
    }

    /// Captured stderr, or the spawn failure reason.
    pub fn stderr(&self) -> &str {
        match self {
            Self::Exited { stderr, .. } => stderr,
            Self::NotStarted { reason } => reason,
        }
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Exited { code, .. } => *code,
            Self::NotStarted { .. } => None,
        }
    }
}

/// Run a command attached to the terminal and wait for it.
///
/// The child is registered with `foreground` while it runs so a signal
/// handler can terminate it. Returns the child's exit code; a child killed
/// by a signal reports 1.
pub fn run_interactive(spec: &CommandSpec, foreground: &ForegroundChild) -> Result<i32> {
    tracing::debug!("Running {}", spec);

    let mut child = spec
        .to_command()
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| RunnerError::SpawnFailed {
            command: spec.to_string(),
            message: e.to_string(),
        })?;

    foreground.register(child.id());
    let status = child.wait();
    foreground.clear();

    let status = status?;
    tracing::debug!("{} exited with {}", spec, status);

    Ok(status.code().unwrap_or(1))
}

/// Run a command with its output buffered. Never fails.
pub fn run_capture(spec: &CommandSpec) -> CaptureResult {
    tracing::debug!("Capturing {}", spec);

    let output = spec
        .to_command()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(output) => CaptureResult::Exited {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        },
        Err(e) => {
            tracing::debug!("Failed to start {}: {}", spec, e);
            CaptureResult::NotStarted {
                reason: e.to_string(),
            }
        }
    }
}
