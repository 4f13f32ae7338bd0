//! Run command implementation
//!
//! Runs one package, configured or not. A configuration entry for the
//! package contributes its overrides; command-line arguments are appended.

use crate::cli::{GlobalArgs, RunArgs};
use crate::commands::helpers;
use crate::config;
use crate::domain::PackageConfig;
use crate::error::Result;
use crate::error::container::package_failed;
use crate::execution::PackageExecutor;
use crate::ui::SpinnerProgressReporter;

/// Run run command
pub fn run(global: &GlobalArgs, args: RunArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(global.workspace.as_deref())?;
    let config_path = helpers::resolve_config_path(global, &workspace);
    let registry = helpers::load_registry(global)?;
    let definition = registry.resolve(&args.id)?;

    let configured = config::load_or_default(&config_path)?;
    let config = package_config(&args.id, &configured, &args.args);

    let runtime = helpers::container_runtime(global);
    let executor = PackageExecutor::new(&runtime, workspace).capture_output(true);
    let mut reporter = SpinnerProgressReporter::new();

    let result = executor.execute(&args.id, definition, &config, &mut reporter)?;
    if !result.is_success() {
        return Err(package_failed(
            &args.id,
            result.exit_code,
            result.output.unwrap_or_default(),
        ));
    }
    Ok(())
}

/// Entry for `id`: the first configured entry (or a bare one) plus `extra`
fn package_config(id: &str, configured: &[PackageConfig], extra: &[String]) -> PackageConfig {
    let mut config = configured
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .unwrap_or_else(|| PackageConfig::new(id));

    if !extra.is_empty() {
        let joined = shell_words::join(extra);
        config.extra_args = Some(match config.extra_args.take() {
            Some(existing) => format!("{existing} {joined}"),
            None => joined,
        });
    }

    config
}
