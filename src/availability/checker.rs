//! Package manager availability probing.
//!
//! Each manager is probed at most once per invocation unless its entry is
//! invalidated after an install attempt.

use std::collections::HashMap;

use crate::detection::PackageManager;
use crate::shell::{run_capture, CaptureResult, CommandSpec};

/// Runs `<manager> --version` and reports the raw result.
pub type VersionProbe = Box<dyn Fn(PackageManager) -> CaptureResult>;

/// Cached availability checks.
pub struct AvailabilityChecker {
    probe: VersionProbe,
    cache: HashMap<PackageManager, bool>,
}

impl Default for AvailabilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityChecker {
    /// Create a checker that probes the real binaries.
    pub fn new() -> Self {
        Self::with_probe(Box::new(|manager: PackageManager| {
            run_capture(&CommandSpec::new(manager.as_str()).arg("--version"))
        }))
    }

    pub fn with_probe(probe: VersionProbe) -> Self {
        Self {
            probe,
            cache: HashMap::new(),
        }
    }

    /// Whether `manager` can be executed. npm is assumed present.
    pub fn is_available(&mut self, manager: PackageManager) -> bool {
        if manager == PackageManager::Npm {
            return true;
        }

        if let Some(&cached) = self.cache.get(&manager) {
            return cached;
        }

        let result = (self.probe)(manager);
        let available = result.success() && !result.stdout().trim().is_empty();
        tracing::debug!(
            "{} --version: {}",
            manager,
            if available { "available" } else { "unavailable" }
        );

        self.cache.insert(manager, available);
        available
    }

    /// The cached verdict for `manager`, if it has been probed.
    pub fn cached(&self, manager: PackageManager) -> Option<bool> {
        self.cache.get(&manager).copied()
    }

    /// Forget the cached verdict for `manager`.
    pub fn invalidate(&mut self, manager: PackageManager) {
        self.cache.remove(&manager);
    }
}
