//! Remove command implementation

use console::Style;

use crate::cli::{GlobalArgs, RemoveArgs};
use crate::commands::helpers;
use crate::error::Result;
use crate::operations::remove_package;

/// Run remove command
pub fn run(global: &GlobalArgs, args: RemoveArgs) -> Result<()> {
    let workspace = helpers::resolve_workspace_path(global.workspace.as_deref())?;
    let config_path = helpers::resolve_config_path(global, &workspace);

    let removed = remove_package(&config_path, &args.id)?;
    let name = Style::new().bold().yellow().apply_to(&args.id);

    if removed == 0 {
        println!("Package {name} is not configured.");
    } else {
        println!("Removed {name} from {}", config_path.display());
    }
    Ok(())
}
