//! Per-invocation state.

use std::path::{Path, PathBuf};

use crate::availability::{default_context, AvailabilityChecker, ResolverContext};
use crate::config::{load_config, RunnerConfig};
use crate::detection::{ProjectDetector, ProjectSnapshot};
use crate::error::Result;
use crate::shell::ForegroundChild;

/// Everything a command needs that outlives a single step: the project
/// location, its configuration, the availability cache and the handle
/// shared with the signal handler.
pub struct RunContext {
    pub project_root: PathBuf,
    pub config: RunnerConfig,
    pub availability: AvailabilityChecker,
    pub resolver: ResolverContext<'static>,
    pub foreground: ForegroundChild,
}

impl RunContext {
    pub fn new(project_root: &Path, config: RunnerConfig, foreground: ForegroundChild) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            availability: AvailabilityChecker::new(),
            resolver: default_context(),
            foreground,
        }
    }

    /// Load `.pr.yml` from `project_root` and build a context around it.
    pub fn load(project_root: &Path, foreground: ForegroundChild) -> Result<Self> {
        let config = load_config(project_root)?;
        Ok(Self::new(project_root, config, foreground))
    }

    /// Replace the availability checker (used to stub probes).
    pub fn with_availability(mut self, availability: AvailabilityChecker) -> Self {
        self.availability = availability;
        self
    }

    /// Analyze the project with the configured role patterns.
    pub fn analyze(&self) -> ProjectSnapshot {
        ProjectDetector::analyze(&self.project_root, &self.config.role_patterns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_applies_role_overrides() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "scripts": { "serve": "http-server dist" } }"#,
        )
        .unwrap();
        fs::write(temp.path().join(".pr.yml"), "roles:\n  dev: []\n  start: [serve]\n").unwrap();

        let ctx = RunContext::load(temp.path(), ForegroundChild::new()).unwrap();
        let project = ctx.analyze();

        let scripts = project.scripts.unwrap();
        assert!(scripts.detected.dev.is_none());
        assert_eq!(scripts.detected.start.as_deref(), Some("serve"));
    }

    #[test]
    fn load_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".pr.yml"), "unknown: true\n").unwrap();

        assert!(RunContext::load(temp.path(), ForegroundChild::new()).is_err());
    }
}
