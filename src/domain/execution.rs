//! Outcome of a single package run

/// Exit code and captured output of one package execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Container exit code (0 on success)
    pub exit_code: i32,
    /// Container output; always present on failure, on success only when requested
    pub output: Option<String>,
}

impl ExecutionResult {
    pub fn success(output: Option<String>) -> Self {
        Self {
            exit_code: 0,
            output,
        }
    }

    pub fn failure(exit_code: i32, output: String) -> Self {
        Self {
            exit_code,
            output: Some(output),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
