//! Domain models for capm
//!
//! This module contains pure domain objects: package definitions, the user's
//! per-package configuration and the result of running a package.

pub mod definition;
pub mod execution;
pub mod package_config;
pub mod workspace_mode;

pub use definition::PackageDefinition;
pub use execution::ExecutionResult;
pub use package_config::PackageConfig;
pub use workspace_mode::WorkspaceMode;
