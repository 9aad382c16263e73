//! Integration tests for the `pr` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pr() -> Command {
    let mut cmd = Command::new(cargo_bin("pr"));
    cmd.env_remove("PR_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("CI", "true");
    cmd
}

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), manifest).unwrap();
    temp
}

const VITE_PROJECT: &str = r#"{
  "name": "web",
  "version": "0.3.0",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "lint": "eslint ."
  }
}"#;

#[test]
fn no_args_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    pr().assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("<script>"));
    Ok(())
}

#[test]
fn help_flag_wins_over_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pr().current_dir(temp.path())
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-install"));
    Ok(())
}

#[test]
fn shows_version() -> Result<(), Box<dyn std::error::Error>> {
    pr().arg("-V")
        .assert()
        .success()
        .stdout(format!("pr v{}\n", env!("CARGO_PKG_VERSION")));
    pr().arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pr v"));
    Ok(())
}

#[test]
fn info_reports_project() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(VITE_PROJECT);
    pr().current_dir(temp.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("web"))
        .stdout(predicate::str::contains("npm (default)"))
        .stdout(predicate::str::contains("pr run   → npm run dev"))
        .stdout(predicate::str::contains("lint → eslint ."));
    Ok(())
}

#[test]
fn info_uses_dir_flag_and_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(VITE_PROJECT);
    let elsewhere = TempDir::new()?;

    pr().current_dir(elsewhere.path())
        .arg("info")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3.0"));

    pr().current_dir(elsewhere.path())
        .env("PR_DIR", temp.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3.0"));
    Ok(())
}

#[test]
fn info_without_project_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pr().current_dir(temp.path())
        .arg("info")
        .assert()
        .success()
        .stderr(predicate::str::contains("No project detected"));
    Ok(())
}

#[test]
fn run_without_project_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pr().current_dir(temp.path())
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("package.json not found"));
    Ok(())
}

#[test]
fn missing_role_lists_scripts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(VITE_PROJECT);
    pr().current_dir(temp.path())
        .arg("test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No test script found"))
        .stdout(predicate::str::contains("  - dev"))
        .stdout(predicate::str::contains("  - lint"))
        .stdout(predicate::str::contains("pr <script>"));
    Ok(())
}

#[test]
fn unknown_script_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(VITE_PROJECT);
    pr().current_dir(temp.path())
        .arg("deploy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Script \"deploy\" not found"))
        .stdout(predicate::str::contains("  - build"));
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(VITE_PROJECT);
    fs::write(temp.path().join(".pr.yml"), "roles:\n  deploy: [ship]\n")?;
    pr().current_dir(temp.path())
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".pr.yml"));
    Ok(())
}

#[test]
fn unknown_flag_warns_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    pr().args(["--frobnicate", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pr v"))
        .stderr(predicate::str::contains("Unknown option --frobnicate ignored"));
    Ok(())
}

#[cfg(unix)]
mod fake_managers {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Put a shell script named `name` into `bin`. It echoes its arguments
    /// and exits with `$FAKE_EXIT` when the first argument is `run`.
    fn fake_manager(bin: &Path, name: &str) {
        let path = bin.join(name);
        let script = format!(
            "#!/bin/sh\necho \"{name} $*\"\nif [ \"$1\" = run ]; then exit ${{FAKE_EXIT:-0}}; fi\nexit 0\n"
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn with_fake_npm(project: &TempDir) -> (TempDir, Command) {
        let bin = TempDir::new().unwrap();
        fake_manager(bin.path(), "npm");

        let mut cmd = pr();
        cmd.current_dir(project.path())
            .env("PATH", format!("{}:/usr/bin:/bin", bin.path().display()));
        (bin, cmd)
    }

    #[test]
    fn run_installs_then_starts_dev() {
        let project = setup_project(VITE_PROJECT);
        let (_bin, mut cmd) = with_fake_npm(&project);

        cmd.arg("run")
            .assert()
            .success()
            .stdout(predicate::str::contains("npm install"))
            .stdout(predicate::str::contains("Dependencies installed"))
            .stdout(predicate::str::contains("npm run dev"));
    }

    #[test]
    fn no_install_skips_install() {
        let project = setup_project(VITE_PROJECT);
        let (_bin, mut cmd) = with_fake_npm(&project);

        cmd.args(["run", "--no-install"])
            .assert()
            .success()
            .stdout(predicate::str::contains("npm install").not())
            .stdout(predicate::str::contains("npm run dev"));
    }

    #[test]
    fn script_exit_code_passes_through() {
        let project = setup_project(VITE_PROJECT);
        let (_bin, mut cmd) = with_fake_npm(&project);

        cmd.env("FAKE_EXIT", "3")
            .arg("lint")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("✗").not());
    }

    #[test]
    fn arguments_are_forwarded() {
        let project = setup_project(VITE_PROJECT);
        let (_bin, mut cmd) = with_fake_npm(&project);

        cmd.args(["lint", "src", "--", "--fix"])
            .assert()
            .success()
            .stdout(predicate::str::contains("npm run lint -- src --fix"));
    }

    #[test]
    fn missing_pnpm_falls_back_to_npm() {
        let project = setup_project(
            r#"{ "packageManager": "pnpm@8.6.0", "scripts": { "build": "tsc" } }"#,
        );
        let (_bin, mut cmd) = with_fake_npm(&project);

        cmd.arg("build")
            .assert()
            .success()
            .stderr(predicate::str::contains("pnpm is not installed"))
            .stderr(predicate::str::contains("falling back to npm"))
            .stdout(predicate::str::contains("npm run build"));
    }
}
