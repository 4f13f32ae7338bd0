//! Remove a package from the configuration

use std::path::Path;

use tracing::info;

use crate::config;
use crate::error::Result;

/// Remove every entry for `id` from the configuration at `config_path`
///
/// Returns the number of entries removed. The file is only rewritten when
/// something was removed.
pub fn remove_package(config_path: &Path, id: &str) -> Result<usize> {
    let mut packages = config::load(config_path)?;

    let before = packages.len();
    packages.retain(|p| p.id != id);
    let removed = before - packages.len();

    if removed > 0 {
        config::save(&packages, config_path)?;
        info!(id, removed, path = %config_path.display(), "package removed");
    }

    Ok(removed)
}
