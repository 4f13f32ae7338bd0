//! Batch runner: every configured package, in order, fail-fast

use tracing::debug;

use super::PackageExecutor;
use crate::domain::{ExecutionResult, PackageConfig};
use crate::error::Result;
use crate::error::container::package_failed;
use crate::registry::PackageRegistry;
use crate::ui::ProgressReporter;

/// Run `packages` in list order
///
/// Stops at the first package that is unknown, cannot be started, or exits
/// non-zero; packages after it are never run. A non-zero exit becomes
/// `PackageFailed` carrying that exit code and the package output.
pub fn run_all(
    executor: &PackageExecutor<'_>,
    registry: &PackageRegistry,
    packages: &[PackageConfig],
    reporter: &mut dyn ProgressReporter,
) -> Result<Vec<ExecutionResult>> {
    let mut results = Vec::with_capacity(packages.len());

    for (index, config) in packages.iter().enumerate() {
        debug!(id = %config.id, position = index + 1, total = packages.len(), "next package");

        let definition = registry.resolve(&config.id)?;
        let result = executor.execute(&config.id, definition, config, reporter)?;

        if !result.is_success() {
            return Err(package_failed(
                &config.id,
                result.exit_code,
                result.output.unwrap_or_default(),
            ));
        }

        results.push(result);
    }

    Ok(results)
}
