//! Package definition domain type
//!
//! A definition describes how to run one package: the container image, the
//! command template and the default workspace mount mode. Definitions are
//! read from YAML files whose file stem is the package id.

use serde::{Deserialize, Serialize};

use super::WorkspaceMode;

/// Static metadata describing how to run a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageDefinition {
    /// Package id, taken from the definition file stem
    #[serde(skip)]
    pub id: String,

    /// Container image reference (e.g., "getcodelimit/codelimit:latest")
    pub image: String,

    /// Command template; may contain a `{workspace}` placeholder
    #[serde(alias = "command")]
    pub args: String,

    /// Command run in the container before the package command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,

    /// Entrypoint override for the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,

    /// Default workspace mount mode
    #[serde(default)]
    pub workspace_mode: WorkspaceMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Language or ecosystem the tool targets (e.g., "Python")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
}

impl PackageDefinition {
    /// Create a definition with the required fields and defaults for the rest
    pub fn new(id: impl Into<String>, image: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            args: args.into(),
            install_command: None,
            entrypoint: None,
            workspace_mode: WorkspaceMode::default(),
            website: None,
            about: None,
            technology: None,
        }
    }

    /// Parse a definition from YAML, assigning the given id
    pub fn from_yaml(id: impl Into<String>, yaml: &str) -> serde_yaml::Result<Self> {
        let mut definition: Self = serde_yaml::from_str(yaml)?;
        definition.id = id.into();
        Ok(definition)
    }

    /// Serialize the definition to YAML (the id lives in the file name)
    pub fn to_yaml(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(self)
    }
}
