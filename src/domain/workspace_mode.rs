//! Workspace mount mode

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CapmError, package::invalid_workspace_mode};

/// Mount permission granted to a container for the project directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceMode {
    /// Read-only bind mount
    #[default]
    Ro,
    /// Read-write bind mount
    Rw,
}

impl WorkspaceMode {
    pub const ALL: [WorkspaceMode; 2] = [WorkspaceMode::Ro, WorkspaceMode::Rw];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkspaceMode::Ro => "ro",
            WorkspaceMode::Rw => "rw",
        }
    }
}

impl fmt::Display for WorkspaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkspaceMode {
    type Err = CapmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ro" => Ok(WorkspaceMode::Ro),
            "rw" => Ok(WorkspaceMode::Rw),
            _ => Err(invalid_workspace_mode(s)),
        }
    }
}
