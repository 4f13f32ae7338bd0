//! Add a package to the configuration

use std::path::Path;

use tracing::info;

use crate::config;
use crate::domain::PackageConfig;
use crate::error::Result;
use crate::error::package::{already_configured, unknown};
use crate::registry::PackageRegistry;

/// Append `id` to the configuration at `config_path` and save it
///
/// Fails if the id is unknown to `registry` or already configured. A missing
/// configuration file is created.
pub fn add_package(config_path: &Path, id: &str, registry: &PackageRegistry) -> Result<()> {
    if !registry.contains(id) {
        return Err(unknown(id));
    }

    let mut packages = config::load_or_default(config_path)?;
    if packages.iter().any(|p| p.id == id) {
        return Err(already_configured(id));
    }

    packages.push(PackageConfig::new(id));
    config::save(&packages, config_path)?;

    info!(id, path = %config_path.display(), "package added");
    Ok(())
}
