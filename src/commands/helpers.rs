//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;
use crate::config::CONFIG_FILE;
use crate::error::Result;
use crate::error::fs::io_error;
use crate::registry::{PackageRegistry, default_packages_dir};
use crate::runtime::DockerCli;

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise, resolve to the
/// current directory. The result is absolute, as container engines require
/// absolute bind mount sources.
pub fn resolve_workspace_path(workspace: Option<&Path>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
    };

    dunce::canonicalize(&path).map_err(|e| {
        io_error(format!(
            "Workspace directory '{}' is not accessible: {e}",
            path.display()
        ))
    })
}

/// Configuration file path: `--config`, else `.capm.yml` in the workspace
pub fn resolve_config_path(global: &GlobalArgs, workspace: &Path) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(|| workspace.join(CONFIG_FILE))
}

/// Definitions directory: `--packages-dir`, else the user config directory
pub fn resolve_packages_dir(global: &GlobalArgs) -> Option<PathBuf> {
    global.packages_dir.clone().or_else(default_packages_dir)
}

/// Build the package registry for this invocation
pub fn load_registry(global: &GlobalArgs) -> Result<PackageRegistry> {
    PackageRegistry::load(resolve_packages_dir(global).as_deref())
}

/// Container runtime selected by `--engine`
pub fn container_runtime(global: &GlobalArgs) -> DockerCli {
    DockerCli::new(global.engine.clone())
}
