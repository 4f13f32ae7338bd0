//! Docker CLI container runtime

use std::ffi::OsString;
use std::process::{Command, Output};

use tracing::{debug, instrument, warn};

use super::{ContainerOutput, ContainerRuntime, ContainerSpec, VolumeBinding};
use crate::domain::WorkspaceMode;
use crate::error::Result;
use crate::error::container::{pull_failed, unavailable};

/// Runtime that shells out to a Docker-compatible CLI
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl DockerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for `<program> run ...`
    fn run_args(spec: &ContainerSpec) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["run".into(), "--rm".into()];

        if let Some(ref entrypoint) = spec.entrypoint {
            args.push("--entrypoint".into());
            args.push(entrypoint.into());
        }

        if let Some(ref dir) = spec.working_dir {
            args.push("--workdir".into());
            args.push(dir.into());
        }

        for volume in &spec.volumes {
            args.push("--mount".into());
            args.push(mount_arg(volume));
        }

        args.push(spec.image.as_str().into());
        args.extend(spec.command.iter().map(OsString::from));
        args
    }

    fn output(&self, args: &[OsString]) -> Result<Output> {
        Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| unavailable(&self.program, e.to_string()))
    }
}

/// `--mount` value for a bind mount
///
/// The value is parsed as CSV by the engine, so a field holding `,` or `"`
/// is quoted. Unlike `--volume`, host paths may contain `:`.
fn mount_arg(volume: &VolumeBinding) -> OsString {
    let source = volume.host_path.to_string_lossy();
    let source_field = if source.contains([',', '"']) {
        format!("\"source={}\"", source.replace('"', "\"\""))
    } else {
        format!("source={source}")
    };

    let mut arg = format!(
        "type=bind,{source_field},target={}",
        volume.container_path
    );
    if volume.mode == WorkspaceMode::Ro {
        arg.push_str(",readonly");
    }
    arg.into()
}

impl ContainerRuntime for DockerCli {
    #[instrument(skip(self), fields(program = %self.program))]
    fn pull(&self, image: &str) -> Result<()> {
        let output = self.output(&["pull".into(), image.into()])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = ?output.status.code(), "image pull failed");
            return Err(pull_failed(image, stderr.trim().to_string()));
        }

        debug!("image pulled");
        Ok(())
    }

    #[instrument(skip_all, fields(program = %self.program, image = %spec.image))]
    fn run(&self, spec: &ContainerSpec) -> Result<ContainerOutput> {
        let args = Self::run_args(spec);
        debug!(?args, "starting container");

        let output = self.output(&args)?;

        let exit_code = output.status.code().unwrap_or_else(|| {
            warn!("container process terminated without an exit code");
            1
        });

        let mut logs = String::from_utf8_lossy(&output.stdout).into_owned();
        logs.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(exit_code, "container finished");
        Ok(ContainerOutput { exit_code, logs })
    }
}
