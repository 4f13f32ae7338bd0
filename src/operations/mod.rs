//! Operations on the package configuration and definitions
//!
//! This module provides the business logic behind the list-editing commands:
//! - [`add`]: Append a known package to the configuration
//! - [`remove`]: Drop every entry for a package from the configuration
//! - [`create`]: Write a new package definition file
//!
//! Commands in `crate::commands` are thin wrappers that resolve paths and
//! prompt the user, then delegate here.

pub mod add;
pub mod create;
pub mod remove;

pub use add::add_package;
pub use create::write_definition;
pub use remove::remove_package;
