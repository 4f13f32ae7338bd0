use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add a package:\n    capm add codelimit\n\n\
                  Select a package interactively:\n    capm add")]
pub struct AddArgs {
    /// Package id to add (if omitted, shows interactive menu)
    pub id: Option<String>,
}
