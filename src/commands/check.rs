//! Check command implementation
//!
//! Runs every configured package in order and stops at the first failure.

use console::Style;

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::helpers;
use crate::config;
use crate::error::{CapmError, Result};
use crate::execution::{PackageExecutor, run_all};
use crate::ui::{ProgressReporter, SilentProgressReporter, SpinnerProgressReporter};

/// Run check command
pub fn run(global: &GlobalArgs, args: CheckArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(global.workspace.as_deref())?;
    let config_path = helpers::resolve_config_path(global, &workspace);
    let packages = config::load(&config_path)?;

    if packages.is_empty() {
        println!("No packages configured.");
        return Ok(());
    }

    let registry = helpers::load_registry(global)?;
    let runtime = helpers::container_runtime(global);
    let executor = PackageExecutor::new(&runtime, workspace).capture_output(args.show_output);
    let mut reporter: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(SpinnerProgressReporter::new())
    };

    let results = match run_all(&executor, &registry, &packages, reporter.as_mut()) {
        Ok(results) => results,
        Err(e) => {
            if args.quiet {
                print_failure_logs(&e);
            }
            return Err(e);
        }
    };

    let label = if results.len() == 1 {
        "package"
    } else {
        "packages"
    };
    println!(
        "{}",
        Style::new()
            .green()
            .bold()
            .apply_to(format!("All {} {label} passed", results.len()))
    );
    Ok(())
}

/// Output of a failed package, which the silent reporter never shows
fn print_failure_logs(error: &CapmError) {
    if let CapmError::PackageFailed { logs, .. } = error {
        let logs = logs.trim_end();
        if !logs.is_empty() {
            println!("{logs}");
        }
    }
}
