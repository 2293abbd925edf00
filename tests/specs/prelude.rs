//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the rxpreview binary against
//! throwaway projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the rxpreview binary
pub fn rxpreview_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rxpreview"));
    cmd.env_remove("RXPREVIEW_CONFIG").env_remove("RXPREVIEW_LOG");
    cmd
}

/// A temporary project directory, marked as a git root so config
/// discovery never leaves it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Write a file relative to the project root, creating parents.
    pub fn file(&self, path: &str, content: &str) -> &Self {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
        self
    }

    /// Write `rxpreview.toml` at the project root.
    pub fn config(&self, content: &str) -> &Self {
        self.file("rxpreview.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `rxpreview` with the project root as working directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = rxpreview_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Run a command and parse its stdout as JSON.
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command should run");
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
