//! Script role classification.
//!
//! Maps the manifest's script table onto the four roles the runner knows
//! about. Each role has an ordered pattern list; an exact script name wins
//! over any substring match, and substring matches skip scripts that install
//! dependencies as part of their command.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// Command fragments that mark a script as an install-then-run combo.
const INSTALL_MARKERS: &[&str] = &[
    "npm i",
    "npm install",
    "yarn install",
    "pnpm install",
    "bun install",
];

/// A semantic script category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptRole {
    Dev,
    Test,
    Build,
    Start,
}

impl ScriptRole {
    /// All roles in display order.
    pub const ALL: [ScriptRole; 4] = [Self::Dev, Self::Test, Self::Build, Self::Start];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Build => "build",
            Self::Start => "start",
        }
    }

    /// The `pr` subcommand that runs this role.
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Dev => "run",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ScriptRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "start" => Ok(Self::Start),
            _ => Err(format!("unknown script role: {}", s)),
        }
    }
}

/// Ordered candidate names for every role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePatterns {
    pub dev: Vec<String>,
    pub test: Vec<String>,
    pub build: Vec<String>,
    pub start: Vec<String>,
}

impl Default for RolePatterns {
    fn default() -> Self {
        fn list(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }

        Self {
            dev: list(&["dev", "serve", "start:dev", "develop", "watch"]),
            test: list(&["test", "test:unit", "test:all", "spec"]),
            build: list(&["build", "compile", "bundle", "dist"]),
            start: list(&["start", "preview", "production"]),
        }
    }
}

impl RolePatterns {
    /// Patterns for a role, highest priority first.
    pub fn get(&self, role: ScriptRole) -> &[String] {
        match role {
            ScriptRole::Dev => &self.dev,
            ScriptRole::Test => &self.test,
            ScriptRole::Build => &self.build,
            ScriptRole::Start => &self.start,
        }
    }

    /// Replace the pattern list for one role.
    pub fn set(&mut self, role: ScriptRole, patterns: Vec<String>) {
        match role {
            ScriptRole::Dev => self.dev = patterns,
            ScriptRole::Test => self.test = patterns,
            ScriptRole::Build => self.build = patterns,
            ScriptRole::Start => self.start = patterns,
        }
    }
}

/// Script names detected for each role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedScripts {
    pub dev: Option<String>,
    pub test: Option<String>,
    pub build: Option<String>,
    pub start: Option<String>,
}

impl DetectedScripts {
    pub fn get(&self, role: ScriptRole) -> Option<&str> {
        match role {
            ScriptRole::Dev => self.dev.as_deref(),
            ScriptRole::Test => self.test.as_deref(),
            ScriptRole::Build => self.build.as_deref(),
            ScriptRole::Start => self.start.as_deref(),
        }
    }
}

/// The project's scripts plus the roles derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptsInfo {
    /// Script name to command text, in manifest order.
    pub scripts: IndexMap<String, String>,
    /// Derived; always re-derivable from `scripts`.
    pub detected: DetectedScripts,
}

impl ScriptsInfo {
    /// Classify a script table with the given role patterns.
    pub fn classify(scripts: IndexMap<String, String>, patterns: &RolePatterns) -> Self {
        let detected = DetectedScripts {
            dev: find_matching_script(&scripts, patterns.get(ScriptRole::Dev)),
            test: find_matching_script(&scripts, patterns.get(ScriptRole::Test)),
            build: find_matching_script(&scripts, patterns.get(ScriptRole::Build)),
            start: find_matching_script(&scripts, patterns.get(ScriptRole::Start)),
        };
        tracing::debug!("Detected script roles: {:?}", detected);

        Self { scripts, detected }
    }

    /// Script names in manifest order.
    pub fn names(&self) -> Vec<String> {
        self.scripts.keys().cloned().collect()
    }

    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    /// Command text of a script.
    pub fn command(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    /// Script to run for a role: the detected one, else one named after the
    /// role itself.
    pub fn script_for(&self, role: ScriptRole) -> Option<&str> {
        self.detected.get(role).or_else(|| {
            self.scripts
                .get_key_value(role.as_str())
                .map(|(name, _)| name.as_str())
        })
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

/// Find the script that best matches an ordered pattern list.
///
/// Exact names are tried first for every pattern; only then are
/// case-insensitive substring matches considered, in manifest order.
pub fn find_matching_script(
    scripts: &IndexMap<String, String>,
    patterns: &[String],
) -> Option<String> {
    if let Some(exact) = patterns.iter().find(|p| scripts.contains_key(p.as_str())) {
        return Some(exact.clone());
    }

    patterns.iter().find_map(|pattern| {
        let pattern = pattern.to_lowercase();
        scripts
            .iter()
            .find(|(name, command)| {
                name.to_lowercase().contains(&pattern) && !installs_dependencies(command)
            })
            .map(|(name, _)| name.clone())
    })
}

/// Whether a script's command text runs a dependency install.
pub fn installs_dependencies(command: &str) -> bool {
    let command = command.to_lowercase();
    INSTALL_MARKERS.iter().any(|marker| command.contains(marker))
}
