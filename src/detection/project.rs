//! Project analysis.
//!
//! Combines package manager, script and dependency detection into a single
//! immutable [`ProjectSnapshot`].

use std::fmt;
use std::path::{Path, PathBuf};

use super::dependencies::{check_dependency_status, DependencyStatus};
use super::manifest::{Manifest, MANIFEST_FILE};
use super::package_manager::{PackageManagerDetector, PackageManagerInfo};
use super::probe::file_exists;
use super::scripts::{RolePatterns, ScriptsInfo};

/// Kind of project found in a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    NodeJs,
    Unknown,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeJs => f.write_str("nodejs"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Everything detected about a project, taken once per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSnapshot {
    pub root: PathBuf,
    pub kind: ProjectKind,
    pub package_manager: PackageManagerInfo,
    /// `None` when there is no readable manifest.
    pub scripts: Option<ScriptsInfo>,
    pub dependencies: DependencyStatus,
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl ProjectSnapshot {
    pub fn is_unknown(&self) -> bool {
        self.kind == ProjectKind::Unknown
    }
}

/// Analyzes project directories.
pub struct ProjectDetector;

impl ProjectDetector {
    /// Analyze `project_root` with the given role patterns.
    pub fn analyze(project_root: &Path, patterns: &RolePatterns) -> ProjectSnapshot {
        if !file_exists(project_root, MANIFEST_FILE) {
            tracing::debug!("No {} in {}", MANIFEST_FILE, project_root.display());
            return ProjectSnapshot {
                root: project_root.to_path_buf(),
                kind: ProjectKind::Unknown,
                package_manager: PackageManagerInfo::default_npm(),
                scripts: None,
                dependencies: DependencyStatus::not_applicable(),
                name: None,
                version: None,
                description: None,
            };
        }

        let manifest = Manifest::read(project_root);
        let package_manager =
            PackageManagerDetector::detect_with_manifest(project_root, manifest.as_ref());
        let scripts = manifest
            .as_ref()
            .map(|m| ScriptsInfo::classify(m.scripts.clone().unwrap_or_default(), patterns));
        let dependencies = check_dependency_status(project_root);
        let manifest = manifest.unwrap_or_default();

        ProjectSnapshot {
            root: project_root.to_path_buf(),
            kind: ProjectKind::NodeJs,
            package_manager,
            scripts,
            dependencies,
            name: manifest.name,
            version: manifest.version,
            description: manifest.description,
        }
    }
}
