use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run a package:\n    capm run codelimit\n\n\
                  Pass extra arguments to the package:\n    capm run ruff --select E,W\n\n\
                  Pass -h or --help to the package:\n    capm run ruff -- --help\n\n\
                  capm options go before 'run'; everything after the package id is passed on.")]
pub struct RunArgs {
    /// Package id to run
    pub id: String,

    /// Arguments appended to the package command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
