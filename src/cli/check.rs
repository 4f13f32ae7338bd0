use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run every configured package:\n    capm check\n\n\
                  Also print the output of passing packages:\n    capm check --show-output\n\n\
                  Only report the final result:\n    capm check --quiet")]
pub struct CheckArgs {
    /// Print package output for successful packages too
    #[arg(long, conflicts_with = "quiet")]
    pub show_output: bool,

    /// Hide per-package progress and output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
