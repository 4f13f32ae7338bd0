//! Package configuration file handling
//!
//! The configuration file (`.capm.yml` by default) is a YAML list of the
//! packages selected for a project:
//!
//! ```yaml
//! - id: codelimit
//! - id: ruff
//!   extra_args: --select E,W
//!   workspace_mode: rw
//! ```
//!
//! The file is only ever rewritten as a whole.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::PackageConfig;
use crate::error::Result;
use crate::error::config::{invalid, not_found, write_failed};
use crate::error::fs::io_error;


/// Default configuration file name, relative to the workspace
pub const CONFIG_FILE: &str = ".capm.yml";

/// Load the package list from a configuration file
pub fn load(path: &Path) -> Result<Vec<PackageConfig>> {
    if !path.is_file() {
        return Err(not_found(path.display().to_string()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| io_error(format!("Failed to read {}: {}", path.display(), e)))?;

    let packages = from_yaml(&path.display().to_string(), &content)?;
    debug!(path = %path.display(), count = packages.len(), "loaded package configuration");
    Ok(packages)
}

/// Load the package list, treating a missing file as an empty list
pub fn load_or_default(path: &Path) -> Result<Vec<PackageConfig>> {
    if path.exists() {
        load(path)
    } else {
        Ok(Vec::new())
    }
}

/// Parse a package list from YAML
///
/// `origin` names the source in error messages.
pub fn from_yaml(origin: &str, yaml: &str) -> Result<Vec<PackageConfig>> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| invalid(origin, e.to_string()))?;

    let serde_yaml::Value::Sequence(entries) = document else {
        return Err(invalid(
            origin,
            format!("expected a list of packages, got {}", describe(&document)),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_yaml::from_value::<PackageConfig>(entry)
                .map_err(|e| invalid(origin, format!("entry {}: {}", index + 1, e)))
        })
        .collect()
}

/// Serialize a package list to YAML
pub fn to_yaml(packages: &[PackageConfig]) -> Result<String> {
    serde_yaml::to_string(packages).map_err(|e| io_error(format!("Failed to serialize: {e}")))
}

/// Write the full package list to `path`, replacing the file atomically
pub fn save(packages: &[PackageConfig], path: &Path) -> Result<()> {
    let content = to_yaml(packages)?;
    let path_str = path.display().to_string();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| write_failed(&path_str, e.to_string()))?;
    file.write_all(content.as_bytes())
        .map_err(|e| write_failed(&path_str, e.to_string()))?;
    file.persist(path)
        .map_err(|e| write_failed(&path_str, e.error.to_string()))?;

    debug!(path = %path_str, count = packages.len(), "saved package configuration");
    Ok(())
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "an empty document",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a list",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
