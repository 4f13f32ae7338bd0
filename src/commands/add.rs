//! Add command implementation

use console::Style;
use inquire::Select;

use crate::cli::{AddArgs, GlobalArgs};
use crate::commands::helpers;
use crate::config;
use crate::error::Result;
use crate::operations::add_package;
use crate::registry::PackageRegistry;

/// Run add command
pub fn run(global: &GlobalArgs, args: AddArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(global.workspace.as_deref())?;
    let config_path = helpers::resolve_config_path(global, &workspace);
    let registry = helpers::load_registry(global)?;

    let id = match args.id {
        Some(id) => id,
        None => {
            let configured = config::load_or_default(&config_path)?;
            let configured: Vec<&str> = configured.iter().map(|p| p.id.as_str()).collect();
            match select_package_interactively(&registry, &configured)? {
                Some(id) => id,
                None => return Ok(()),
            }
        }
    };

    add_package(&config_path, &id, &registry)?;

    println!(
        "Added {} to {}",
        Style::new().bold().yellow().apply_to(&id),
        config_path.display()
    );
    Ok(())
}

/// Pick one package that is not configured yet
fn select_package_interactively(
    registry: &PackageRegistry,
    configured: &[&str],
) -> Result<Option<String>> {
    let candidates: Vec<&str> = registry
        .ids()
        .filter(|id| !configured.contains(id))
        .collect();

    if candidates.is_empty() {
        println!("All available packages are already configured.");
        return Ok(None);
    }

    let items: Vec<String> = candidates
        .iter()
        .map(|id| match registry.get(id).and_then(|d| d.about.as_deref()) {
            Some(about) => format!("{id} - {about}"),
            None => (*id).to_string(),
        })
        .collect();

    let selection = Select::new("Select package to add", items)
        .with_starting_cursor(0)
        .with_page_size(10)
        .with_help_message("↑↓ to move, type to filter, ENTER to select, ESC to cancel")
        .raw_prompt_skippable()?;

    Ok(selection.and_then(|choice| candidates.get(choice.index).map(|id| (*id).to_string())))
}
