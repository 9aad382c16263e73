//! Filesystem probes.
//!
//! Every probe swallows IO errors: a path that cannot be stat'ed is treated
//! as absent and carries no timestamp.

use std::path::Path;
use std::time::SystemTime;

/// Check if a regular file exists relative to project root.
pub fn file_exists(project_root: &Path, file: &str) -> bool {
    project_root
        .join(file)
        .metadata()
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Check if a directory exists relative to project root.
pub fn dir_exists(project_root: &Path, dir: &str) -> bool {
    project_root
        .join(dir)
        .metadata()
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Return the first of `files` that exists as a regular file.
pub fn first_existing_file<'a>(project_root: &Path, files: &[&'a str]) -> Option<&'a str> {
    files.iter().copied().find(|f| file_exists(project_root, f))
}

/// Modification time of a path, if it can be read.
pub fn modified_time(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}

/// True only when both timestamps exist and `candidate` is strictly newer.
pub fn is_newer(candidate: Option<SystemTime>, reference: Option<SystemTime>) -> bool {
    match (candidate, reference) {
        (Some(c), Some(r)) => c > r,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn file_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::create_dir(temp.path().join("node_modules")).unwrap();

        assert!(file_exists(temp.path(), "package.json"));
        assert!(!file_exists(temp.path(), "missing.json"));
        assert!(!file_exists(temp.path(), "node_modules"));
    }

    #[test]
    fn dir_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("node_modules")).unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();

        assert!(dir_exists(temp.path(), "node_modules"));
        assert!(!dir_exists(temp.path(), "yarn.lock"));
        assert!(!dir_exists(temp.path(), "missing"));
    }

    #[test]
    fn first_existing_file_respects_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        fs::write(temp.path().join("package-lock.json"), "{}").unwrap();

        let found = first_existing_file(
            temp.path(),
            &["pnpm-lock.yaml", "yarn.lock", "package-lock.json"],
        );
        assert_eq!(found, Some("yarn.lock"));
    }

    #[test]
    fn modified_time_missing_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(modified_time(&temp.path().join("nope")).is_none());
        assert!(modified_time(temp.path()).is_some());
    }

    #[test]
    fn is_newer_requires_both_timestamps() {
        let now = SystemTime::now();
        let earlier = now - Duration::from_secs(60);

        assert!(is_newer(Some(now), Some(earlier)));
        assert!(!is_newer(Some(earlier), Some(now)));
        assert!(!is_newer(Some(now), Some(now)));
        assert!(!is_newer(None, Some(earlier)));
        assert!(!is_newer(Some(now), None));
    }
}
