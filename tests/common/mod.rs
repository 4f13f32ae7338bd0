//! Common test utilities for capm integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Image the fake engine treats as a failing package
pub const FAILING_IMAGE: &str = "example/fail:1";

/// Image the fake engine cannot pull
pub const MISSING_IMAGE: &str = "example/missing:1";

/// Exit code of a failing package run by the fake engine
pub const FAILING_EXIT_CODE: i32 = 2;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to resolve temp directory");
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Directory used as the user packages directory
    pub fn packages_dir(&self) -> PathBuf {
        self.path.join(".capm-packages")
    }

    /// Write a user package definition
    pub fn write_definition(&self, id: &str, yaml: &str) {
        self.write_file(&format!(".capm-packages/{id}.yml"), yaml);
    }

    /// Write the workspace configuration
    pub fn write_config(&self, yaml: &str) {
        self.write_file(".capm.yml", yaml);
    }

    /// File the fake engine appends its invocations to
    pub fn engine_log(&self) -> PathBuf {
        self.path.join("engine.log")
    }

    /// Invocations recorded by the fake engine, one per line
    pub fn engine_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.engine_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Install a Docker-compatible fake engine script and return its path
    ///
    /// `pull` succeeds except for [`MISSING_IMAGE`]; `run` prints a line and
    /// exits 0, or [`FAILING_EXIT_CODE`] when the image is [`FAILING_IMAGE`].
    #[cfg(unix)]
    pub fn fake_engine(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
case "$1" in
  pull)
    if [ "$2" = "{missing}" ]; then
      echo "manifest unknown" >&2
      exit 1
    fi
    exit 0
    ;;
  run)
    for arg in "$@"; do
      if [ "$arg" = "{failing}" ]; then
        echo "issues found"
        exit {code}
      fi
    done
    echo "no issues"
    exit 0
    ;;
esac
exit 0
"#,
            log = self.engine_log().display(),
            missing = MISSING_IMAGE,
            failing = FAILING_IMAGE,
            code = FAILING_EXIT_CODE,
        );

        let path = self.path.join("fake-engine");
        std::fs::write(&path, script).expect("Failed to write fake engine");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake engine executable");
        path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// capm command running inside `workspace`, isolated from the developer's environment
#[allow(deprecated)]
pub fn capm_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("capm").expect("capm binary should be built");
    cmd.current_dir(&workspace.path);
    for var in [
        "CAPM_WORKSPACE",
        "CAPM_CONFIG",
        "CAPM_CONTAINER_ENGINE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("CAPM_PACKAGES_DIR", workspace.packages_dir());
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_engine_calls_empty_before_use() {
        let workspace = TestWorkspace::new();
        assert!(workspace.engine_calls().is_empty());
    }
}
