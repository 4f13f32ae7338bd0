use clap::Parser;

/// Arguments for the info command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List available packages:\n    capm info\n\n\
                  Show one package in detail:\n    capm info codelimit")]
pub struct InfoArgs {
    /// Package id to show in detail (if omitted, lists all packages)
    pub id: Option<String>,
}
