//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - remove: Remove command arguments
//! - list: List command arguments
//! - check: Check command arguments
//! - run: Run command arguments
//! - info: Info command arguments
//! - create: Create command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod check;
pub mod completions;
pub mod create;
pub mod info;
pub mod list;
pub mod remove;
pub mod run;

pub use add::AddArgs;
pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use create::CreateArgs;
pub use info::InfoArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;
pub use run::RunArgs;

use crate::runtime::DEFAULT_ENGINE;

/// capm - Code Analysis Package Manager
///
/// Run linters, formatters and analyzers as containers against your workspace.
#[derive(Parser, Debug)]
#[command(
    name = "capm",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package manager for containerized code analysis tools",
    long_about = "capm runs code analysis packages (linters, formatters, analyzers) as \
                  containers against the current workspace. Packages are selected in a \
                  .capm.yml file and executed in order; the first failing package stops \
                  the run and its exit code becomes capm's exit code.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  capm add codelimit          \x1b[90m# Add a package to .capm.yml\x1b[0m\n   \
                  capm check                  \x1b[90m# Run every configured package\x1b[0m\n   \
                  capm run ruff --fix         \x1b[90m# Run one package with extra arguments\x1b[0m\n   \
                  capm info ruff              \x1b[90m# Show package details\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
///
/// Accepted before the subcommand only, so that everything after
/// `capm run <id>` reaches the package untouched.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Workspace directory mounted into package containers (defaults to current directory)
    #[arg(long, short = 'w', env = "CAPM_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to .capm.yml in the workspace)
    #[arg(long, short = 'c', env = "CAPM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory with additional package definitions
    #[arg(long, env = "CAPM_PACKAGES_DIR")]
    pub packages_dir: Option<PathBuf>,

    /// Container engine executable (docker, podman, ...)
    #[arg(long, env = "CAPM_CONTAINER_ENGINE", default_value = DEFAULT_ENGINE)]
    pub engine: String,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a package to the configuration
    Add(AddArgs),

    /// Remove a package from the configuration
    Remove(RemoveArgs),

    /// List configured packages
    List(ListArgs),

    /// Run every configured package
    Check(CheckArgs),

    /// Run a single package
    Run(RunArgs),

    /// Show package definitions
    Info(InfoArgs),

    /// Create a package definition interactively
    Create(CreateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
