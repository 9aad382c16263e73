//! Configuration file loading.

use crate::config::schema::RunnerConfig;
use crate::error::{Result, RunnerError};
use std::fs;
use std::path::Path;

/// Project configuration file name.
pub const CONFIG_FILE: &str = ".pr.yml";

/// Load `.pr.yml` from `project_root`.
///
/// A missing file yields the default configuration.
pub fn load_config(project_root: &Path) -> Result<RunnerConfig> {
    let path = project_root.join(CONFIG_FILE);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(RunnerConfig::default());
        }
        Err(e) => return Err(RunnerError::Io(e)),
    };

    tracing::debug!("Loading config from {}", path.display());
    parse_config(&content, &path)
}

/// Parse YAML content into RunnerConfig.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RunnerConfig> {
    // An empty document is a valid, empty config
    if content.trim().is_empty() {
        return Ok(RunnerConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| RunnerError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
