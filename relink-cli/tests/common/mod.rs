//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment with its own working and home directories
//! - Command builders for common patterns
//! - Site fixtures written as manifest files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Documents of a small blog used across tests.
pub const BLOG: [&str; 6] = [
    "index.md",
    "about.md",
    "blog/index.md",
    "blog/2024/first-post.md",
    "blog/2024/second-post.md",
    "assets/logo.png",
];

/// Environment variables the CLI reads.
const RELINK_VARS: [&str; 9] = [
    "RELINK_CONFIG",
    "RELINK_LOG_MODE",
    "RELINK_LINK_PROPERTY",
    "RELINK_MATCH",
    "RELINK_MATCH_DOT",
    "RELINK_MATCH_NOCASE",
    "RELINK_MATCH_BASE",
    "RELINK_EMPTY_LINK",
    "RELINK_MODIFY_LINKS",
];

/// Test environment with an isolated working directory.
///
/// Commands run with the temporary directory as their working directory and
/// with `HOME` pointing inside it, so no real configuration is picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Get a command builder running in this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("relink").expect("Failed to find relink binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", self.temp_path.join("home"));
        for var in RELINK_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the blog site loaded from a manifest.
    pub fn blog_command(&self) -> Command {
        let manifest = self.write_manifest("blog.txt", &BLOG);
        let mut cmd = self.command();
        cmd.arg("--manifest").arg(manifest);
        cmd
    }

    /// Write a manifest listing `documents`.
    pub fn write_manifest(&self, name: &str, documents: &[&str]) -> PathBuf {
        let mut contents = String::from("# generated by the test suite\n");
        for document in documents {
            contents.push_str(document);
            contents.push('\n');
        }
        self.write_file(name, &contents)
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

/// Parse stdout of a successful command as JSON.
#[allow(dead_code)]
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
