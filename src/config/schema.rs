//! Configuration schema for `.pr.yml`.

use serde::Deserialize;

use crate::detection::{RolePatterns, ScriptRole};

/// Root configuration structure for `.pr.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Per-role script name patterns
    pub roles: RoleOverrides,
}

/// Replacement pattern lists. Absent roles keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleOverrides {
    pub dev: Option<Vec<String>>,
    pub test: Option<Vec<String>>,
    pub build: Option<Vec<String>>,
    pub start: Option<Vec<String>>,
}

impl RoleOverrides {
    pub fn get(&self, role: ScriptRole) -> Option<&[String]> {
        let patterns = match role {
            ScriptRole::Dev => &self.dev,
            ScriptRole::Test => &self.test,
            ScriptRole::Build => &self.build,
            ScriptRole::Start => &self.start,
        };
        patterns.as_deref()
    }
}

impl RunnerConfig {
    /// Default pattern lists with this config's overrides applied.
    pub fn role_patterns(&self) -> RolePatterns {
        let mut patterns = RolePatterns::default();
        for role in ScriptRole::ALL {
            if let Some(overrides) = self.roles.get(role) {
                patterns.set(role, overrides.to_vec());
            }
        }
        patterns
    }
}
