//! Container runtime boundary
//!
//! The [`ContainerRuntime`] trait is the only way capm talks to a container
//! engine. [`DockerCli`] drives the `docker` executable (or any CLI with the
//! same `pull`/`run` surface, such as `podman`); tests substitute a fake.

mod docker;

use std::path::PathBuf;

use crate::domain::WorkspaceMode;
use crate::error::Result;

pub use docker::DockerCli;

/// Default container engine executable
pub const DEFAULT_ENGINE: &str = "docker";

/// A host directory bound into the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeBinding {
    pub host_path: PathBuf,
    pub container_path: String,
    pub mode: WorkspaceMode,
}

/// Everything needed to start one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub image: String,
    /// Entrypoint override
    pub entrypoint: Option<String>,
    /// Command arguments passed after the image
    pub command: Vec<String>,
    /// Working directory inside the container
    pub working_dir: Option<String>,
    pub volumes: Vec<VolumeBinding>,
}

/// Exit status and combined output of a finished container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOutput {
    pub exit_code: i32,
    pub logs: String,
}

/// Capability interface to a container engine
pub trait ContainerRuntime {
    /// Pull `image` from its registry
    fn pull(&self, image: &str) -> Result<()>;

    /// Run a container to completion and return its exit code and logs
    ///
    /// A non-zero exit is not an error; only failing to talk to the engine is.
    fn run(&self, spec: &ContainerSpec) -> Result<ContainerOutput>;
}
