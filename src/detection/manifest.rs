//! `package.json` reading.
//!
//! Only the fields the runner cares about are modeled. Anything malformed is
//! tolerated: a field with the wrong JSON type is dropped rather than failing
//! the whole manifest.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` used for detection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,

    /// Scripts in manifest order. Non-string commands are skipped.
    #[serde(default, deserialize_with = "lenient_scripts")]
    pub scripts: Option<IndexMap<String, String>>,

    /// Corepack `packageManager` field, e.g. `pnpm@8.6.0`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub package_manager: Option<String>,

    /// Volta toolchain pin, e.g. `{ "node": "20.1.0", "pnpm": "8.6.0" }`.
    #[serde(default)]
    pub volta: Option<Value>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Read `package.json` from a project directory.
    ///
    /// Returns `None` when the file is missing, unreadable, or not a JSON
    /// object.
    pub fn read(project_root: &Path) -> Option<Self> {
        let path = project_root.join(MANIFEST_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", path.display(), e);
                return None;
            }
        };

        match Self::parse(&text) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::debug!("Ignoring malformed {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Version pinned for `manager` in the volta object, if it is a string.
    pub fn volta_version(&self, manager: &str) -> Option<&str> {
        self.volta
            .as_ref()
            .and_then(|pins| pins.get(manager))
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_scripts<'de, D>(deserializer: D) -> Result<Option<IndexMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(table)) => Some(
            table
                .into_iter()
                .filter_map(|(name, cmd)| match cmd {
                    Value::String(cmd) => Some((name, cmd)),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
