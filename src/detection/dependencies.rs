//! Dependency staleness detection.
//!
//! Decides whether `node_modules` needs a fresh install by comparing
//! modification times. Missing timestamps never count as stale.

use std::fmt;
use std::path::Path;

use super::manifest::MANIFEST_FILE;
use super::package_manager::LOCKFILES;
use super::probe::{dir_exists, file_exists, is_newer, modified_time};

/// Installed dependencies directory.
pub const DEPENDENCIES_DIR: &str = "node_modules";

/// Why an install is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallReason {
    /// `node_modules` does not exist.
    DependenciesMissing,
    /// The lockfile changed after the last install.
    LockfileUpdated,
    /// `package.json` changed after the last install.
    ManifestUpdated,
}

impl fmt::Display for InstallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::DependenciesMissing => "dependencies directory missing",
            Self::LockfileUpdated => "lockfile updated",
            Self::ManifestUpdated => "manifest updated",
        };
        f.write_str(text)
    }
}

/// Whether dependencies are installed and current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyStatus {
    pub has_node_modules: bool,
    pub needs_install: bool,
    pub reason: Option<InstallReason>,
}

impl DependencyStatus {
    fn stale(has_node_modules: bool, reason: InstallReason) -> Self {
        Self {
            has_node_modules,
            needs_install: true,
            reason: Some(reason),
        }
    }

    /// Dependencies present and newer than lockfile and manifest.
    pub fn up_to_date() -> Self {
        Self {
            has_node_modules: true,
            needs_install: false,
            reason: None,
        }
    }

    /// Status reported for directories that are not Node projects.
    pub fn not_applicable() -> Self {
        Self {
            has_node_modules: false,
            needs_install: false,
            reason: None,
        }
    }
}

/// Check whether the project at `project_root` needs an install.
pub fn check_dependency_status(project_root: &Path) -> DependencyStatus {
    if !dir_exists(project_root, DEPENDENCIES_DIR) {
        tracing::debug!("{} missing", DEPENDENCIES_DIR);
        return DependencyStatus::stale(false, InstallReason::DependenciesMissing);
    }

    let installed_at = modified_time(&project_root.join(DEPENDENCIES_DIR));

    if let Some((lockfile, _)) = LOCKFILES
        .iter()
        .find(|(file, _)| file_exists(project_root, file))
    {
        if is_newer(modified_time(&project_root.join(lockfile)), installed_at) {
            tracing::debug!("{} is newer than {}", lockfile, DEPENDENCIES_DIR);
            return DependencyStatus::stale(true, InstallReason::LockfileUpdated);
        }
    }

    if is_newer(modified_time(&project_root.join(MANIFEST_FILE)), installed_at) {
        tracing::debug!("{} is newer than {}", MANIFEST_FILE, DEPENDENCIES_DIR);
        return DependencyStatus::stale(true, InstallReason::ManifestUpdated);
    }

    DependencyStatus::up_to_date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    /// Project with manifest, lockfile and `node_modules`, all stamped at
    /// the given ages (seconds before now).
    fn project(manifest_age: u64, lock_age: Option<u64>, modules_age: u64) -> TempDir {
        let temp = TempDir::new().unwrap();
        let now = SystemTime::now();

        let manifest = temp.path().join("package.json");
        fs::write(&manifest, "{}").unwrap();
        set_mtime(&manifest, now - Duration::from_secs(manifest_age));

        if let Some(age) = lock_age {
            let lock = temp.path().join("pnpm-lock.yaml");
            fs::write(&lock, "").unwrap();
            set_mtime(&lock, now - Duration::from_secs(age));
        }

        let modules = temp.path().join(DEPENDENCIES_DIR);
        fs::create_dir(&modules).unwrap();
        set_mtime_dir(&modules, now - Duration::from_secs(modules_age));

        temp
    }

    #[cfg(unix)]
    fn set_mtime_dir(path: &Path, time: SystemTime) {
        File::open(path).unwrap().set_modified(time).unwrap();
    }

    #[cfg(not(unix))]
    fn set_mtime_dir(path: &Path, time: SystemTime) {
        use std::os::windows::fs::OpenOptionsExt;
        // FILE_FLAG_BACKUP_SEMANTICS is required to open a directory handle
        File::options()
            .write(true)
            .custom_flags(0x0200_0000)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    #[test]
    fn missing_node_modules_needs_install() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        let status = check_dependency_status(temp.path());

        assert!(status.needs_install);
        assert!(!status.has_node_modules);
        assert_eq!(status.reason, Some(InstallReason::DependenciesMissing));
        assert!(status.reason.unwrap().to_string().contains("missing"));
    }

    #[test]
    fn node_modules_as_file_counts_as_missing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEPENDENCIES_DIR), "").unwrap();

        let status = check_dependency_status(temp.path());

        assert_eq!(status.reason, Some(InstallReason::DependenciesMissing));
    }

    #[test]
    fn newer_lockfile_needs_install() {
        let temp = project(600, Some(10), 300);

        let status = check_dependency_status(temp.path());

        assert!(status.needs_install);
        assert!(status.has_node_modules);
        assert_eq!(status.reason, Some(InstallReason::LockfileUpdated));
    }

    #[test]
    fn newer_manifest_needs_install() {
        let temp = project(10, Some(600), 300);

        let status = check_dependency_status(temp.path());

        assert_eq!(status.reason, Some(InstallReason::ManifestUpdated));
    }

    #[test]
    fn newer_manifest_without_lockfile_needs_install() {
        let temp = project(10, None, 300);

        let status = check_dependency_status(temp.path());

        assert_eq!(status.reason, Some(InstallReason::ManifestUpdated));
    }

    #[test]
    fn fresh_node_modules_needs_nothing() {
        let temp = project(600, Some(500), 10);

        let status = check_dependency_status(temp.path());

        assert_eq!(status, DependencyStatus::up_to_date());
    }

    #[test]
    fn equal_timestamps_are_not_stale() {
        let temp = TempDir::new().unwrap();
        let stamp = SystemTime::now() - Duration::from_secs(100);

        let manifest = temp.path().join("package.json");
        fs::write(&manifest, "{}").unwrap();
        set_mtime(&manifest, stamp);
        let modules = temp.path().join(DEPENDENCIES_DIR);
        fs::create_dir(&modules).unwrap();
        set_mtime_dir(&modules, stamp);

        let status = check_dependency_status(temp.path());

        assert!(!status.needs_install);
    }

    #[test]
    fn missing_manifest_is_not_stale() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(DEPENDENCIES_DIR)).unwrap();

        let status = check_dependency_status(temp.path());

        assert!(!status.needs_install);
    }

    #[test]
    fn reason_labels() {
        assert_eq!(InstallReason::LockfileUpdated.to_string(), "lockfile updated");
        assert_eq!(InstallReason::ManifestUpdated.to_string(), "manifest updated");
    }
}
