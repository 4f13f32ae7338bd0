//! Configuration errors

use super::CapmError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> CapmError {
    CapmError::ConfigNotFound { path: path.into() }
}

/// Creates an invalid config error
pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> CapmError {
    CapmError::ConfigInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> CapmError {
    CapmError::ConfigWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
