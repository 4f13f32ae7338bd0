use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a package:\n    capm remove codelimit")]
pub struct RemoveArgs {
    /// Package id to remove; every entry with this id is removed
    pub id: String,
}
