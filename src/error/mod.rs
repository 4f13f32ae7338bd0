//! Error types and handling for capm
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Package configuration (`.capm.yml`) errors
//! - [`package`]: Package definition and lookup errors
//! - [`container`]: Container runtime errors
//! - [`fs`]: File system and prompt errors

pub mod config;
pub mod container;
pub mod fs;
pub mod package;


use miette::Diagnostic;
use thiserror::Error;

/// Exit code used for usage, configuration and runtime errors
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Main error type for capm operations
#[derive(Error, Diagnostic, Debug)]
pub enum CapmError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(capm::config::not_found),
        help("Run 'capm add <package>' to create a configuration file")
    )]
    ConfigNotFound { path: String },

    #[error("Invalid configuration in {path}: {reason}")]
    #[diagnostic(
        code(capm::config::invalid),
        help("The configuration must be a YAML list of entries such as '- id: codelimit'")
    )]
    ConfigInvalid { path: String, reason: String },

    #[error("Failed to write configuration file: {path}: {reason}")]
    #[diagnostic(code(capm::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    // Package errors
    #[error("Failed to parse package definition: {path}: {reason}")]
    #[diagnostic(
        code(capm::package::parse_failed),
        help("A definition needs at least 'image' and 'args' keys")
    )]
    DefinitionParseFailed { path: String, reason: String },

    #[error("Failed to write package definition: {path}: {reason}")]
    #[diagnostic(code(capm::package::write_failed))]
    DefinitionWriteFailed { path: String, reason: String },

    #[error("Unknown package: {id}")]
    #[diagnostic(
        code(capm::package::unknown),
        help("Run 'capm info' to see the available packages")
    )]
    UnknownPackage { id: String },

    #[error("Package '{id}' is already configured")]
    #[diagnostic(code(capm::package::already_configured))]
    PackageAlreadyConfigured { id: String },

    #[error("Invalid workspace mode: {value}")]
    #[diagnostic(
        code(capm::package::invalid_workspace_mode),
        help("Valid workspace modes: ro, rw")
    )]
    InvalidWorkspaceMode { value: String },

    #[error("Invalid command for package '{id}': {reason}")]
    #[diagnostic(code(capm::package::invalid_command))]
    InvalidCommand { id: String, reason: String },

    // Container errors
    #[error("Failed to pull image '{image}': {reason}")]
    #[diagnostic(
        code(capm::container::pull_failed),
        help("Check the image reference and your network connection")
    )]
    ImagePullFailed { image: String, reason: String },

    #[error("Container runtime '{program}' is not available: {reason}")]
    #[diagnostic(
        code(capm::container::unavailable),
        help("Install Docker or point CAPM_CONTAINER_ENGINE at a compatible CLI")
    )]
    ContainerRuntimeUnavailable { program: String, reason: String },

    #[error("Package '{id}' failed with exit code {exit_code}")]
    #[diagnostic(code(capm::container::package_failed))]
    PackageFailed {
        id: String,
        exit_code: i32,
        /// Combined container output of the failing run
        logs: String,
    },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(capm::fs::io_error))]
    IoError { message: String },

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(capm::fs::prompt_failed))]
    PromptFailed { message: String },
}

impl CapmError {
    /// Process exit code for this error
    ///
    /// A failing package propagates its own exit code; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CapmError::PackageFailed { exit_code, .. } => *exit_code,
            _ => FAILURE_EXIT_CODE,
        }
    }
}

impl From<std::io::Error> for CapmError {
    fn from(err: std::io::Error) -> Self {
        CapmError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for CapmError {
    fn from(err: inquire::InquireError) -> Self {
        CapmError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CapmError>;
