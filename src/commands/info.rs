//! Info command implementation

use console::Style;

use crate::cli::{GlobalArgs, InfoArgs};
use crate::commands::helpers;
use crate::error::Result;
use crate::ui::display::display_definition;

/// Run info command
pub fn run(global: &GlobalArgs, args: InfoArgs) -> Result<()> {
    let registry = helpers::load_registry(global)?;

    if let Some(id) = args.id {
        let definition = registry.resolve(&id)?;
        display_definition(definition, true);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No packages available.");
        return Ok(());
    }

    println!(
        "{} ({}):",
        Style::new().bold().apply_to("Available packages"),
        registry.len()
    );
    for definition in registry.iter() {
        display_definition(definition, false);
    }
    println!();
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to("Run 'capm info <package>' for details or 'capm add <package>' to use one.")
    );

    Ok(())
}
