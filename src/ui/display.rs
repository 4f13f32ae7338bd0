//! Display functions for package definitions and configuration entries

use console::Style;

use crate::domain::{PackageConfig, PackageDefinition};

macro_rules! display_opt_field {
    ($indent:expr, $label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("{}{} {}", $indent, Style::new().bold().apply_to($label), v);
        }
    };
}

/// Display a package definition
///
/// The simple form shows the id and a one-line description; the detailed
/// form adds image, command and mount details.
pub fn display_definition(definition: &PackageDefinition, detailed: bool) {
    let name = Style::new().bold().yellow().apply_to(&definition.id);
    match (&definition.about, detailed) {
        (Some(about), false) => println!("  {name} {}", Style::new().dim().apply_to(about)),
        _ => println!("  {name}"),
    }

    if !detailed {
        return;
    }

    display_opt_field!("    ", "About:", definition.about);
    display_opt_field!("    ", "Technology:", definition.technology);
    display_opt_field!("    ", "Website:", definition.website);
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Image:"),
        Style::new().cyan().apply_to(&definition.image)
    );
    display_opt_field!("    ", "Entrypoint:", definition.entrypoint);
    display_opt_field!("    ", "Install command:", definition.install_command);
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Command:"),
        definition.args
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Workspace mode:"),
        definition.workspace_mode
    );
}

/// Display one configured package with its overrides
pub fn display_config_entry(entry: &PackageConfig, definition: Option<&PackageDefinition>) {
    let name = Style::new().bold().yellow().apply_to(&entry.id);
    match definition {
        Some(def) => println!("  {name} {}", Style::new().dim().apply_to(&def.image)),
        None => println!(
            "  {name} {}",
            Style::new().red().apply_to("(unknown package)")
        ),
    }

    if !entry.has_overrides() {
        return;
    }
    display_opt_field!("    ", "args:", entry.args);
    display_opt_field!("    ", "extra_args:", entry.extra_args);
    display_opt_field!("    ", "workspace_mode:", entry.workspace_mode);
}
