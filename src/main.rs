//! capm - Code Analysis Package Manager
//!
//! Runs code analysis tools (linters, formatters, analyzers) packaged as
//! container images against a workspace directory, driven by a `.capm.yml`
//! list of packages.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod execution;
mod logging;
mod operations;
mod registry;
mod runtime;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::FAILURE_EXIT_CODE;

/// Parse arguments; usage errors exit with [`FAILURE_EXIT_CODE`]
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(FAILURE_EXIT_CODE);
        }
        // --help and --version
        Err(e) => e.exit(),
    }
}

fn main() {
    let cli = parse_cli();
    logging::init(cli.global.verbose);

    let global = cli.global;
    let result = match cli.command {
        Commands::Add(args) => commands::add::run(&global, args),
        Commands::Remove(args) => commands::remove::run(&global, args),
        Commands::List(args) => commands::list::run(&global, args),
        Commands::Check(args) => commands::check::run(&global, args),
        Commands::Run(args) => commands::run::run(&global, args),
        Commands::Info(args) => commands::info::run(&global, args),
        Commands::Create(args) => commands::create::run(&global, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
