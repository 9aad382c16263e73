//! Package manager detection.
//!
//! Resolution order, first match wins:
//!
//! 1. the Corepack `packageManager` field (`pnpm@8.6.0`)
//! 2. the `volta` toolchain pin (pnpm, then yarn, then npm)
//! 3. the first lockfile found in [`LOCKFILES`] order
//! 4. npm

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::manifest::Manifest;
use super::probe::file_exists;

/// A supported JavaScript package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Lockfiles in detection priority order.
pub const LOCKFILES: &[(&str, PackageManager)] = &[
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

static PACKAGE_MANAGER_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(npm|yarn|pnpm|bun)@(.+)$").unwrap());

/// Volta pin keys in priority order.
const VOLTA_ORDER: &[PackageManager] = &[
    PackageManager::Pnpm,
    PackageManager::Yarn,
    PackageManager::Npm,
];

impl PackageManager {
    /// Binary and display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Command line that runs `script`, forwarding `args` to it.
    pub fn run_command(&self, script: &str, args: &[String]) -> Vec<String> {
        let mut cmd = match self {
            Self::Npm => vec!["npm", "run", script],
            Self::Bun => vec!["bun", "run", script],
            Self::Pnpm => vec!["pnpm", script],
            Self::Yarn => vec!["yarn", script],
        }
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

        if !args.is_empty() {
            // npm swallows flags meant for the script without the separator
            if *self == Self::Npm {
                cmd.push("--".to_string());
            }
            cmd.extend(args.iter().cloned());
        }
        cmd
    }

    /// Command line that installs the project's dependencies.
    pub fn install_command(&self) -> Vec<String> {
        vec![self.as_str().to_string(), "install".to_string()]
    }

    /// Command line that installs this package manager globally through npm.
    pub fn global_install_command(&self) -> Vec<String> {
        ["npm", "install", "-g", self.as_str()]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            _ => Err(format!("unsupported package manager: {}", s)),
        }
    }
}

/// Which rule produced the detected package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// The `packageManager` manifest field.
    PackageManagerField,
    /// The `volta` toolchain pin.
    Volta,
    /// A lockfile in the project root.
    Lockfile,
    /// Nothing matched.
    Default,
}

impl DetectionSource {
    /// Label as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PackageManagerField => "packageManager",
            Self::Volta => "volta",
            Self::Lockfile => "lockfile",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of package manager detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerInfo {
    pub name: PackageManager,
    pub version: Option<String>,
    pub source: DetectionSource,
}

impl PackageManagerInfo {
    fn new(name: PackageManager, version: Option<String>, source: DetectionSource) -> Self {
        Self {
            name,
            version,
            source,
        }
    }

    /// The fallback when nothing else matched.
    pub fn default_npm() -> Self {
        Self::new(PackageManager::Npm, None, DetectionSource::Default)
    }

    /// `name` or `name@version`.
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(v) => format!("{}@{}", self.name, v),
            None => self.name.to_string(),
        }
    }
}

/// Detects which package manager a project uses.
pub struct PackageManagerDetector;

impl PackageManagerDetector {
    /// Detect the package manager for a project directory.
    ///
    /// Never fails; an unreadable manifest skips straight to the lockfile scan.
    pub fn detect(project_root: &Path) -> PackageManagerInfo {
        Self::detect_with_manifest(project_root, Manifest::read(project_root).as_ref())
    }

    /// Detect using an already-read manifest.
    pub fn detect_with_manifest(
        project_root: &Path,
        manifest: Option<&Manifest>,
    ) -> PackageManagerInfo {
        if let Some(manifest) = manifest {
            if let Some(info) = Self::from_package_manager_field(manifest) {
                tracing::debug!("Package manager {} from packageManager field", info.name);
                return info;
            }
            if let Some(info) = Self::from_volta(manifest) {
                tracing::debug!("Package manager {} from volta pin", info.name);
                return info;
            }
        }

        if let Some(info) = Self::from_lockfile(project_root) {
            tracing::debug!("Package manager {} from lockfile", info.name);
            return info;
        }

        tracing::debug!("No package manager hints, defaulting to npm");
        PackageManagerInfo::default_npm()
    }

    fn from_package_manager_field(manifest: &Manifest) -> Option<PackageManagerInfo> {
        let field = manifest.package_manager.as_deref()?;
        let caps = PACKAGE_MANAGER_FIELD.captures(field)?;
        let name = caps.get(1)?.as_str().parse().ok()?;
        let version = caps.get(2).map(|m| m.as_str().to_string());
        Some(PackageManagerInfo::new(
            name,
            version,
            DetectionSource::PackageManagerField,
        ))
    }

    fn from_volta(manifest: &Manifest) -> Option<PackageManagerInfo> {
        VOLTA_ORDER.iter().find_map(|pm| {
            manifest.volta_version(pm.as_str()).map(|version| {
                PackageManagerInfo::new(*pm, Some(version.to_string()), DetectionSource::Volta)
            })
        })
    }

    fn from_lockfile(project_root: &Path) -> Option<PackageManagerInfo> {
        LOCKFILES
            .iter()
            .find(|(file, _)| file_exists(project_root, file))
            .map(|(_, pm)| PackageManagerInfo::new(*pm, None, DetectionSource::Lockfile))
    }
}
