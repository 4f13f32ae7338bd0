use clap::Parser;

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a definition in the user packages directory:\n    capm create\n\n\
                  Create a definition in a project directory:\n    capm --packages-dir ./capm-packages create")]
pub struct CreateArgs {
    /// Overwrite an existing definition without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}
