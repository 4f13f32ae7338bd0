//! Container runtime errors

use super::CapmError;

/// Creates an image pull failed error
pub fn pull_failed(image: impl Into<String>, reason: impl Into<String>) -> CapmError {
    CapmError::ImagePullFailed {
        image: image.into(),
        reason: reason.into(),
    }
}

/// Creates a runtime unavailable error
pub fn unavailable(program: impl Into<String>, reason: impl Into<String>) -> CapmError {
    CapmError::ContainerRuntimeUnavailable {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates a package failed error carrying the container exit code and logs
pub fn package_failed(id: impl Into<String>, exit_code: i32, logs: impl Into<String>) -> CapmError {
    CapmError::PackageFailed {
        id: id.into(),
        exit_code,
        logs: logs.into(),
    }
}
