//! Write package definition files

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::PackageDefinition;
use crate::error::Result;
use crate::error::package::write_failed;

/// Path of the definition file for `id` inside `packages_dir`
pub fn definition_path(packages_dir: &Path, id: &str) -> PathBuf {
    packages_dir.join(format!("{id}.yml"))
}

/// Check that `id` can be used as a definition file stem
pub fn validate_id(id: &str) -> std::result::Result<(), String> {
    if id.is_empty() {
        return Err("Package id cannot be empty".to_string());
    }
    if id.starts_with('.') {
        return Err("Package id cannot start with '.'".to_string());
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err("Package id may only contain letters, digits, '-', '_' and '.'".to_string());
    }
    Ok(())
}

/// Write `definition` to `<packages_dir>/<id>.yml`, creating the directory
///
/// Overwrites an existing file; callers confirm with the user first.
pub fn write_definition(packages_dir: &Path, definition: &PackageDefinition) -> Result<PathBuf> {
    let path = definition_path(packages_dir, &definition.id);
    let path_str = path.display().to_string();

    fs::create_dir_all(packages_dir).map_err(|e| write_failed(&path_str, e.to_string()))?;
    let content = definition
        .to_yaml()
        .map_err(|e| write_failed(&path_str, e.to_string()))?;
    fs::write(&path, content).map_err(|e| write_failed(&path_str, e.to_string()))?;

    info!(id = %definition.id, path = %path_str, "package definition written");
    Ok(path)
}
