//! Test fixtures shared by unit tests.
//!
//! - [`FakeRuntime`]: a scripted [`ContainerRuntime`] that records every call
//! - [`RecordingReporter`]: a [`ProgressReporter`] that records every event
//! - [`codelimit_definition`]: the canonical sample definition
//!
//! # Usage
//!
//! ```ignore
//! let runtime = FakeRuntime::new().with_exit_code("example/lint", 2, "1 issue found");
//! let executor = PackageExecutor::new(&runtime, "/work");
//! let result = executor.execute("lint", &definition, &config, &mut RecordingReporter::default())?;
//! assert_eq!(runtime.runs().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::domain::PackageDefinition;
use crate::error::Result;
use crate::error::container::pull_failed;
use crate::runtime::{ContainerOutput, ContainerRuntime, ContainerSpec};
use crate::ui::ProgressReporter;

/// A call made against [`FakeRuntime`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCall {
    Pull(String),
    Run(ContainerSpec),
}

/// Scripted container runtime; every image exits 0 unless told otherwise
#[derive(Debug, Default)]
pub struct FakeRuntime {
    calls: RefCell<Vec<RuntimeCall>>,
    exits: HashMap<String, (i32, String)>,
    failing_pulls: HashSet<String>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make runs of `image` exit with `exit_code` and print `logs`
    pub fn with_exit_code(mut self, image: &str, exit_code: i32, logs: &str) -> Self {
        self.exits
            .insert(image.to_string(), (exit_code, logs.to_string()));
        self
    }

    /// Make pulls of `image` fail
    pub fn with_pull_failure(mut self, image: &str) -> Self {
        self.failing_pulls.insert(image.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls.borrow().clone()
    }

    /// Specs of all `run` calls, in order
    pub fn runs(&self) -> Vec<ContainerSpec> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                RuntimeCall::Run(spec) => Some(spec.clone()),
                RuntimeCall::Pull(_) => None,
            })
            .collect()
    }

    /// Images of all `pull` calls, in order
    pub fn pulls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                RuntimeCall::Pull(image) => Some(image.clone()),
                RuntimeCall::Run(_) => None,
            })
            .collect()
    }
}

impl ContainerRuntime for FakeRuntime {
    fn pull(&self, image: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(RuntimeCall::Pull(image.to_string()));
        if self.failing_pulls.contains(image) {
            return Err(pull_failed(image, "manifest unknown"));
        }
        Ok(())
    }

    fn run(&self, spec: &ContainerSpec) -> Result<ContainerOutput> {
        self.calls.borrow_mut().push(RuntimeCall::Run(spec.clone()));
        let (exit_code, logs) = self
            .exits
            .get(&spec.image)
            .cloned()
            .unwrap_or_else(|| (0, format!("{} ok\n", spec.image)));
        Ok(ContainerOutput { exit_code, logs })
    }
}

/// Progress reporter that records events as strings
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

impl ProgressReporter for RecordingReporter {
    fn pulling(&mut self, id: &str, image: &str) {
        self.events.push(format!("pull {id} {image}"));
    }

    fn running(&mut self, id: &str, image: &str) {
        self.events.push(format!("run {id} {image}"));
    }

    fn succeeded(&mut self, id: &str) {
        self.events.push(format!("ok {id}"));
    }

    fn failed(&mut self, id: &str, exit_code: i32) {
        self.events.push(format!("fail {id} {exit_code}"));
    }

    fn output(&mut self, id: &str, text: &str) {
        self.events.push(format!("output {id} {}", text.trim_end()));
    }

    fn abandon(&mut self) {
        self.events.push("abandon".to_string());
    }
}

/// `codelimit -> {image: getcodelimit/codelimit:latest, args: "scan ."}`
#[must_use]
pub fn codelimit_definition() -> PackageDefinition {
    PackageDefinition::new("codelimit", "getcodelimit/codelimit:latest", "scan .")
}
