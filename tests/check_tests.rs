//! Integration tests for check and run against a fake container engine

#![cfg(unix)]

mod common;

use common::{
    FAILING_EXIT_CODE, FAILING_IMAGE, MISSING_IMAGE, TestWorkspace, capm_cmd,
};
use predicates::prelude::*;
use serial_test::serial;

/// Workspace with `lint`, `broken` and `gone` user definitions
fn workspace_with_definitions() -> TestWorkspace {
    let workspace = TestWorkspace::new();
    workspace.write_definition("lint", "image: example/lint:1\nargs: lint {workspace}\n");
    workspace.write_definition(
        "broken",
        &format!("image: {FAILING_IMAGE}\nargs: check .\n"),
    );
    workspace.write_definition("gone", &format!("image: {MISSING_IMAGE}\nargs: check .\n"));
    workspace
}

fn run_calls(workspace: &TestWorkspace) -> Vec<String> {
    workspace
        .engine_calls()
        .into_iter()
        .filter(|call| call.starts_with("run "))
        .collect()
}

#[test]
#[serial]
fn test_check_runs_every_package_in_order() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: lint\n- id: codelimit\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("[lint] Package executed successfully"))
        .stdout(predicate::str::contains("All 2 packages passed"));

    let calls = workspace.engine_calls();
    assert_eq!(calls[0], "pull example/lint:1");
    assert_eq!(
        calls[1],
        format!(
            "run --rm --workdir /capm/workspace --mount type=bind,source={},target=/capm/workspace,readonly example/lint:1 lint /capm/workspace",
            workspace.path.display()
        )
    );
    assert_eq!(calls[2], "pull getcodelimit/codelimit:latest");
    assert!(calls[3].ends_with("getcodelimit/codelimit:latest scan ."));
}

#[test]
#[serial]
fn test_check_stops_at_first_failure() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: broken\n- id: lint\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .arg("check")
        .assert()
        .code(FAILING_EXIT_CODE)
        .stdout(predicate::str::contains(format!(
            "[broken] Error running package, exit code: {FAILING_EXIT_CODE}"
        )))
        .stdout(predicate::str::contains("issues found"))
        .stderr(predicate::str::contains("Package 'broken' failed"));

    let runs = run_calls(&workspace);
    assert_eq!(runs.len(), 1);
    assert!(runs[0].contains(FAILING_IMAGE));
    assert!(!workspace.engine_calls().iter().any(|c| c.contains("example/lint:1")));
}

#[test]
#[serial]
fn test_check_unknown_package_aborts() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: lint\n- id: ghost\n- id: codelimit\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown package: ghost"));

    let runs = run_calls(&workspace);
    assert_eq!(runs.len(), 1);
    assert!(runs[0].contains("example/lint:1"));
}

#[test]
#[serial]
fn test_check_pull_failure() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: gone\n- id: lint\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to pull image"))
        .stderr(predicate::str::contains("manifest unknown"));

    assert!(run_calls(&workspace).is_empty());
}

#[test]
#[serial]
fn test_check_applies_config_overrides() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config(
        "- id: lint\n  args: --strict\n  extra_args: \"--out '{workspace}/report one.txt'\"\n  workspace_mode: rw\n",
    );

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .arg("check")
        .assert()
        .success();

    let runs = run_calls(&workspace);
    assert!(runs[0].contains(",target=/capm/workspace example/lint:1"));
    assert!(runs[0].ends_with(
        "example/lint:1 lint /capm/workspace --strict --out /capm/workspace/report one.txt"
    ));
}

#[test]
#[serial]
fn test_check_show_output() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: lint\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .args(["check", "--show-output"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));
}

#[test]
#[serial]
fn test_check_hides_output_of_passing_packages() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: lint\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues").not());
}

#[test]
fn test_check_empty_config() {
    let workspace = TestWorkspace::new();
    workspace.write_config("[]\n");

    capm_cmd(&workspace)
        .args(["--engine", "/nonexistent/engine", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No packages configured."));
}

#[test]
fn test_check_missing_config() {
    let workspace = TestWorkspace::new();

    capm_cmd(&workspace)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_check_engine_not_installed() {
    let workspace = workspace_with_definitions();
    workspace.write_config("- id: lint\n");

    capm_cmd(&workspace)
        .args(["--engine", "/nonexistent/engine", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not available"));
}

#[test]
#[serial]
fn test_run_unconfigured_package_with_args() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .args(["run", "lint", "--select", "E W"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));

    let runs = run_calls(&workspace);
    assert_eq!(runs.len(), 1);
    assert!(runs[0].ends_with("example/lint:1 lint /capm/workspace --select E W"));
    assert!(!workspace.file_exists(".capm.yml"));
}

#[test]
#[serial]
fn test_run_uses_configured_entry() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: lint\n  workspace_mode: rw\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .args(["run", "lint"])
        .assert()
        .success();

    assert!(run_calls(&workspace)[0].contains(",target=/capm/workspace example/lint:1"));
}

#[test]
#[serial]
fn test_run_failing_package_propagates_exit_code() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .args(["run", "broken"])
        .assert()
        .code(FAILING_EXIT_CODE)
        .stdout(predicate::str::contains("issues found"));
}

#[test]
fn test_run_unknown_package() {
    let workspace = TestWorkspace::new();

    capm_cmd(&workspace)
        .args(["run", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown package: ghost"));
}

#[test]
#[serial]
fn test_engine_from_environment() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: lint\n");

    capm_cmd(&workspace)
        .env("CAPM_CONTAINER_ENGINE", &engine)
        .arg("check")
        .assert()
        .success();

    assert_eq!(run_calls(&workspace).len(), 1);
}

#[test]
#[serial]
fn test_check_quiet_hides_progress() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: lint\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .args(["check", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package executed successfully").not())
        .stdout(predicate::str::contains("All 1 package passed"));
}

#[test]
#[serial]
fn test_check_quiet_still_shows_failing_output() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();
    workspace.write_config("- id: broken\n");

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .args(["check", "--quiet"])
        .assert()
        .code(FAILING_EXIT_CODE)
        .stdout(predicate::str::contains("issues found"))
        .stdout(predicate::str::contains("Error running package").not())
        .stderr(predicate::str::contains("Package 'broken' failed"));
}

#[test]
#[serial]
fn test_run_passes_short_flags_to_package() {
    let workspace = workspace_with_definitions();
    let engine = workspace.fake_engine();

    capm_cmd(&workspace)
        .arg("--engine")
        .arg(&engine)
        .args(["run", "lint", "-v", "-c", "strict.toml"])
        .assert()
        .success();

    let runs = run_calls(&workspace);
    assert_eq!(runs.len(), 1);
    assert!(runs[0].ends_with("example/lint:1 lint /capm/workspace -v -c strict.toml"));
}
