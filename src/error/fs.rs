//! File system errors

use super::CapmError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CapmError {
    CapmError::IoError {
        message: message.into(),
    }
}
