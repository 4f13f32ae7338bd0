//! Package definition and lookup errors

use super::CapmError;

/// Creates a definition parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CapmError {
    CapmError::DefinitionParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a definition write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> CapmError {
    CapmError::DefinitionWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown package error
pub fn unknown(id: impl Into<String>) -> CapmError {
    CapmError::UnknownPackage { id: id.into() }
}

/// Creates an already configured error
pub fn already_configured(id: impl Into<String>) -> CapmError {
    CapmError::PackageAlreadyConfigured { id: id.into() }
}

/// Creates an invalid workspace mode error
pub fn invalid_workspace_mode(value: impl Into<String>) -> CapmError {
    CapmError::InvalidWorkspaceMode {
        value: value.into(),
    }
}

/// Creates an invalid command error
pub fn invalid_command(id: impl Into<String>, reason: impl Into<String>) -> CapmError {
    CapmError::InvalidCommand {
        id: id.into(),
        reason: reason.into(),
    }
}
