//! Package execution pipeline
//!
//! Turns one package (definition + configuration entry) into a container
//! invocation:
//!
//! 1. resolve the workspace mode (entry override, else definition default)
//! 2. render the command template and append the entry's arguments
//! 3. pull the image
//! 4. run the image with the workspace bound at [`WORKSPACE_DIR`]
//! 5. map the container exit code and logs to an [`ExecutionResult`]
//!
//! Nothing is retried: a pull failure is an error, a non-zero exit is a
//! failed result.

pub mod batch;


use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{ExecutionResult, PackageConfig, PackageDefinition, WorkspaceMode};
use crate::error::Result;
use crate::error::package::invalid_command;
use crate::runtime::{ContainerRuntime, ContainerSpec, VolumeBinding};
use crate::ui::ProgressReporter;

pub use batch::run_all;

/// Mount point of the workspace inside package containers
pub const WORKSPACE_DIR: &str = "/capm/workspace";

/// Placeholder substituted with [`WORKSPACE_DIR`] in command templates
pub const WORKSPACE_PLACEHOLDER: &str = "{workspace}";

/// Replace every `{workspace}` placeholder in `template`
pub fn render_command(template: &str, workspace_dir: &str) -> String {
    template.replace(WORKSPACE_PLACEHOLDER, workspace_dir)
}

/// Workspace mode for a run: the entry override, else the definition default
pub fn effective_workspace_mode(
    definition: &PackageDefinition,
    config: &PackageConfig,
) -> WorkspaceMode {
    config.workspace_mode.unwrap_or(definition.workspace_mode)
}

/// Rendered command line: definition command, then `args`, then `extra_args`
pub fn command_line(definition: &PackageDefinition, config: &PackageConfig) -> String {
    [
        Some(definition.args.as_str()),
        config.args.as_deref(),
        config.extra_args.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .map(|part| render_command(part, WORKSPACE_DIR))
    .collect::<Vec<_>>()
    .join(" ")
}

/// Argument vector passed to the container
///
/// With an install command the package runs as
/// `sh -c "<install_command> && <command>"`, which needs the image's own
/// entrypoint; combining it with an entrypoint override is rejected.
pub fn container_command(
    definition: &PackageDefinition,
    config: &PackageConfig,
) -> Result<Vec<String>> {
    let command = command_line(definition, config);

    if let Some(ref install) = definition.install_command {
        if definition.entrypoint.is_some() {
            return Err(invalid_command(
                &definition.id,
                "install_command cannot be combined with an entrypoint override",
            ));
        }
        let install = render_command(install.trim(), WORKSPACE_DIR);
        return Ok(vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("{install} && {command}"),
        ]);
    }

    shell_words::split(&command).map_err(|e| invalid_command(&definition.id, e.to_string()))
}

/// Runs single packages against one workspace
pub struct PackageExecutor<'a> {
    runtime: &'a dyn ContainerRuntime,
    workspace: PathBuf,
    capture_output: bool,
}

impl<'a> PackageExecutor<'a> {
    /// `workspace` is the host directory bound into every container
    pub fn new(runtime: &'a dyn ContainerRuntime, workspace: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            workspace: workspace.into(),
            capture_output: false,
        }
    }

    /// Keep container output of successful runs as well
    #[must_use]
    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    /// Build the container invocation for a package
    pub fn container_spec(
        &self,
        definition: &PackageDefinition,
        config: &PackageConfig,
    ) -> Result<ContainerSpec> {
        Ok(ContainerSpec {
            image: definition.image.clone(),
            entrypoint: definition.entrypoint.clone(),
            command: container_command(definition, config)?,
            working_dir: Some(WORKSPACE_DIR.to_string()),
            volumes: vec![VolumeBinding {
                host_path: self.workspace.clone(),
                container_path: WORKSPACE_DIR.to_string(),
                mode: effective_workspace_mode(definition, config),
            }],
        })
    }

    /// Pull and run one package
    ///
    /// Returns `Err` only when the runtime could not pull or start the
    /// package; a non-zero container exit is reported in the result.
    pub fn execute(
        &self,
        id: &str,
        definition: &PackageDefinition,
        config: &PackageConfig,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<ExecutionResult> {
        let spec = self.container_spec(definition, config)?;

        reporter.pulling(id, &spec.image);
        if let Err(e) = self.runtime.pull(&spec.image) {
            reporter.abandon();
            return Err(e);
        }

        reporter.running(id, &spec.image);
        info!(id, image = %spec.image, command = ?spec.command, "running package");
        let output = match self.runtime.run(&spec) {
            Ok(output) => output,
            Err(e) => {
                reporter.abandon();
                return Err(e);
            }
        };

        let result = if output.exit_code == 0 {
            reporter.succeeded(id);
            ExecutionResult::success(self.capture_output.then_some(output.logs))
        } else {
            debug!(id, exit_code = output.exit_code, "package failed");
            reporter.failed(id, output.exit_code);
            ExecutionResult::failure(output.exit_code, output.logs)
        };

        if let Some(ref text) = result.output {
            reporter.output(id, text);
        }
        Ok(result)
    }
}
