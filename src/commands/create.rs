//! Create command implementation
//!
//! Prompts for the fields of a new package definition and writes it to the
//! packages directory, where the registry picks it up on the next run.

use console::Style;
use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

use crate::cli::{CreateArgs, GlobalArgs};
use crate::commands::helpers;
use crate::domain::{PackageDefinition, WorkspaceMode};
use crate::error::Result;
use crate::error::fs::io_error;
use crate::operations::create::{definition_path, validate_id};
use crate::operations::write_definition;

/// Run create command
pub fn run(global: &GlobalArgs, args: CreateArgs) -> Result<()> {
    let packages_dir = helpers::resolve_packages_dir(global).ok_or_else(|| {
        io_error("Could not determine the packages directory, pass --packages-dir")
    })?;

    let Some(definition) = prompt_definition()? else {
        return Ok(());
    };

    let path = definition_path(&packages_dir, &definition.id);
    if path.exists() && !args.yes {
        let overwrite = Confirm::new(&format!("{} already exists. Overwrite?", path.display()))
            .with_default(false)
            .prompt()?;
        if !overwrite {
            println!("Nothing written.");
            return Ok(());
        }
    }

    let path = write_definition(&packages_dir, &definition)?;

    println!(
        "Created {} at {}",
        Style::new().bold().yellow().apply_to(&definition.id),
        path.display()
    );
    println!(
        "{}",
        Style::new().dim().apply_to(format!(
            "Run 'capm add {}' to use it in this workspace.",
            definition.id
        ))
    );
    Ok(())
}

/// Ask for every definition field; `None` when the user cancels
fn prompt_definition() -> Result<Option<PackageDefinition>> {
    let id = Text::new("Package id:")
        .with_help_message("Used as the definition file name, e.g. 'mylint'")
        .with_validator(|input: &str| {
            Ok(match validate_id(input) {
                Ok(()) => Validation::Valid,
                Err(message) => Validation::Invalid(message.into()),
            })
        })
        .prompt_skippable()?;
    let Some(id) = id else {
        return Ok(None);
    };

    let Some(image) = Text::new("Container image:")
        .with_help_message("e.g. 'getcodelimit/codelimit:latest'")
        .with_validator(not_blank)
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    let Some(args) = Text::new("Command:")
        .with_help_message("Arguments passed to the image; {workspace} is the mounted workspace")
        .with_validator(not_blank)
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    let Some(workspace_mode) = Select::new("Workspace mode:", WorkspaceMode::ALL.to_vec())
        .with_help_message("ro mounts the workspace read-only, rw lets the package modify it")
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    let mut definition = PackageDefinition::new(id.trim(), image.trim(), args.trim());
    definition.workspace_mode = workspace_mode;
    definition.install_command = optional_text("Install command (optional):")?;
    definition.entrypoint = optional_text("Entrypoint (optional):")?;
    definition.about = optional_text("Description (optional):")?;
    definition.website = optional_text("Website (optional):")?;
    definition.technology = optional_text("Technology (optional):")?;

    Ok(Some(definition))
}

fn not_blank(
    input: &str,
) -> std::result::Result<Validation, Box<dyn std::error::Error + Send + Sync>> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("A value is required".into()))
    } else {
        Ok(Validation::Valid)
    }
}

fn optional_text(message: &str) -> Result<Option<String>> {
    let answer = Text::new(message).prompt_skippable()?;
    Ok(answer
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}
