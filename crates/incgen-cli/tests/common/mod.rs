//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with a temporary project directory
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Create an empty file (and its parent directories) under the project
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, "").expect("Failed to write file");
        self
    }

    /// Create a directory under the project
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path().join(relative)).expect("Failed to create dir");
        self
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command running inside the project directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("incgen").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("INCGEN_REFERENCE_DIR")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted stdout lines, for comparisons that must ignore traversal order
pub fn sorted_lines(stdout: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
