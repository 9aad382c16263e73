//! Platform capability checks.

use std::io::IsTerminal;

/// Environment variables set by common CI providers.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    ci_detected(|name| std::env::var_os(name).is_some())
}

fn ci_detected(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(*name))
}

/// Whether standard input is attached to a terminal.
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Whether the user can be prompted: a terminal on stdin and no CI.
///
/// Evaluated once per invocation in `main`.
pub fn can_prompt() -> bool {
    stdin_is_interactive() && !is_ci()
}
