//! Version command implementation
//!
//! Prints the build plus the defaults capm resolves at runtime, which is
//! what bug reports usually need.

use crate::config::CONFIG_FILE;
use crate::error::Result;
use crate::execution::WORKSPACE_DIR;
use crate::registry::{PackageRegistry, default_packages_dir};
use crate::runtime::DEFAULT_ENGINE;

/// Run version command
pub fn run() -> Result<()> {
    let bundled = PackageRegistry::builtin()?;
    let packages_dir = default_packages_dir()
        .map_or_else(|| "(unavailable)".to_string(), |dir| dir.display().to_string());

    println!("capm {} ({} build)", env!("CARGO_PKG_VERSION"), build_profile());
    println!();
    println!("Defaults:");
    println!("  Container engine: {DEFAULT_ENGINE}");
    println!("  Config file: {CONFIG_FILE}");
    println!("  Packages dir: {packages_dir}");
    println!("  Workspace mount: {WORKSPACE_DIR}");
    println!();
    println!(
        "Bundled packages ({}): {}",
        bundled.len(),
        bundled.ids().collect::<Vec<_>>().join(", ")
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
