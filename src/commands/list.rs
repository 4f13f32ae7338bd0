//! List command implementation
//!
//! This command lists the packages configured in `.capm.yml`, in the order
//! they run, with their overrides.

use console::Style;

use crate::cli::{GlobalArgs, ListArgs};
use crate::commands::helpers;
use crate::config;
use crate::error::Result;
use crate::ui::display::display_config_entry;

/// Run list command
pub fn run(global: &GlobalArgs, _args: ListArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(global.workspace.as_deref())?;
    let config_path = helpers::resolve_config_path(global, &workspace);
    let packages = config::load(&config_path)?;
    let registry = helpers::load_registry(global)?;

    if packages.is_empty() {
        println!("No packages configured.");
        return Ok(());
    }

    println!(
        "{} ({}):",
        Style::new().bold().apply_to("Configured packages"),
        packages.len()
    );
    for entry in &packages {
        display_config_entry(entry, registry.get(&entry.id));
    }

    Ok(())
}
