//! Foreground child tracking and termination signals.

use anyhow::Context;
use std::sync::{Arc, Mutex};

use crate::error::Result;

/// Shared handle to the child currently attached to the terminal.
///
/// At most one child is registered at a time. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct ForegroundChild {
    pid: Arc<Mutex<Option<u32>>>,
}

impl ForegroundChild {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, pid: u32) {
        if let Ok(mut slot) = self.pid.lock() {
            *slot = Some(pid);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.pid.lock() {
            *slot = None;
        }
    }

    pub fn current(&self) -> Option<u32> {
        self.pid.lock().ok().and_then(|slot| *slot)
    }

    /// Ask the registered child to terminate. Returns whether a child was
    /// signalled.
    pub fn terminate(&self) -> bool {
        match self.current() {
            Some(pid) => {
                tracing::debug!("Terminating child {}", pid);
                kill(pid)
            }
            None => false,
        }
    }
}

#[cfg(unix)]
fn kill(pid: u32) -> bool {
    // SAFETY: kill() only sends a signal; an invalid pid yields an error code
    unsafe { libc::kill(pid as libc::pid_t, libc::SIGTERM) == 0 }
}

#[cfg(windows)]
fn kill(pid: u32) -> bool {
    std::process::Command::new("taskkill")
        .args(["/PID", &pid.to_string(), "/T", "/F"])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(not(any(unix, windows)))]
fn kill(_pid: u32) -> bool {
    false
}

/// Install the interrupt/terminate handler.
///
/// On SIGINT or SIGTERM the registered child is terminated and the process
/// exits with code 0.
pub fn install_signal_handler(foreground: ForegroundChild) -> Result<()> {
    ctrlc::set_handler(move || {
        foreground.terminate();
        std::process::exit(0);
    })
    .context("Failed to install signal handler")?;
    Ok(())
}
