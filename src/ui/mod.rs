//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting for package runs (pull, run, success, failure)
//! - An interactive spinner using indicatif
//! - Silent progress for tests and scripted use
//! - Styled display of definitions and configuration entries
//!
//! All progress reporting goes through the ProgressReporter trait so the
//! execution pipeline never writes to the terminal directly.

pub mod display;

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for package executions
pub trait ProgressReporter {
    /// The package image is being pulled
    fn pulling(&mut self, id: &str, image: &str);

    /// The package container is running
    fn running(&mut self, id: &str, image: &str);

    /// The package exited with code 0
    fn succeeded(&mut self, id: &str);

    /// The package exited with a non-zero code
    fn failed(&mut self, id: &str, exit_code: i32);

    /// Output captured from the package container
    fn output(&mut self, id: &str, text: &str);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a spinner per package
#[derive(Default)]
pub struct SpinnerProgressReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn spinner(&mut self) -> &ProgressBar {
        self.spinner.get_or_insert_with(|| {
            let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(style);
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner
        })
    }

    fn finish(&mut self, message: String) {
        match self.spinner.take() {
            Some(spinner) if !spinner.is_hidden() => spinner.finish_with_message(message),
            Some(spinner) => {
                spinner.finish_and_clear();
                println!("{message}");
            }
            None => println!("{message}"),
        }
    }
}

impl ProgressReporter for SpinnerProgressReporter {
    fn pulling(&mut self, id: &str, image: &str) {
        self.spinner()
            .set_message(format!("[{id}] Pulling image: {image}"));
    }

    fn running(&mut self, id: &str, image: &str) {
        self.spinner()
            .set_message(format!("[{id}] Running image: {image}"));
    }

    fn succeeded(&mut self, id: &str) {
        let mark = Style::new().green().bold().apply_to("✔");
        self.finish(format!("{mark} [{id}] Package executed successfully"));
    }

    fn failed(&mut self, id: &str, exit_code: i32) {
        let mark = Style::new().red().bold().apply_to("✖");
        self.finish(format!(
            "{mark} [{id}] Error running package, exit code: {exit_code}"
        ));
    }

    fn output(&mut self, _id: &str, text: &str) {
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        match self.spinner {
            Some(ref spinner) => spinner.suspend(|| println!("{text}")),
            None => println!("{text}"),
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn pulling(&mut self, _id: &str, _image: &str) {}

    fn running(&mut self, _id: &str, _image: &str) {}

    fn succeeded(&mut self, _id: &str) {}

    fn failed(&mut self, _id: &str, _exit_code: i32) {}

    fn output(&mut self, _id: &str, _text: &str) {}

    fn abandon(&mut self) {}
}
