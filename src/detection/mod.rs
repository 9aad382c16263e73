//! Project and package manager detection.

pub mod dependencies;
pub mod manifest;
pub mod package_manager;
pub mod probe;
pub mod project;
pub mod scripts;

pub use dependencies::{check_dependency_status, DependencyStatus, InstallReason};
pub use manifest::Manifest;
pub use package_manager::{
    DetectionSource, PackageManager, PackageManagerDetector, PackageManagerInfo,
};
pub use project::{ProjectDetector, ProjectKind, ProjectSnapshot};
pub use scripts::{DetectedScripts, RolePatterns, ScriptRole, ScriptsInfo};
