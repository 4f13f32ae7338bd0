//! Command implementations for the capm CLI

pub mod add;
pub mod check;
pub mod completions;
pub mod create;
pub mod helpers;
pub mod info;
pub mod list;
pub mod remove;
pub mod run;
pub mod version;
