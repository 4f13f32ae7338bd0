//! Per-package configuration entry from `.capm.yml`

use serde::{Deserialize, Serialize};

use super::WorkspaceMode;

/// The user's selection of one package, with optional overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Id of the package definition to run
    pub id: String,

    /// Arguments appended to the definition's command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,

    /// Further arguments appended after `args`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_args: Option<String>,

    /// Overrides the definition's default workspace mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_mode: Option<WorkspaceMode>,
}

impl PackageConfig {
    /// Create an entry with no overrides
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            args: None,
            extra_args: None,
            workspace_mode: None,
        }
    }

    /// True when the entry carries any override
    pub fn has_overrides(&self) -> bool {
        self.args.is_some() || self.extra_args.is_some() || self.workspace_mode.is_some()
    }
}
