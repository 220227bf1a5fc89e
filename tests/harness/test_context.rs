//! Shared testing harness for `escribe` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::MockServices;

pub(crate) const API_KEY_ENV: &str = "ESCRIBE_TEST_GEMINI_KEY";
pub(crate) const API_KEY: &str = "integration-key";

/// Isolated working directory with an `escribe.toml` pointing at mock services.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create an empty environment without any configuration file.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment whose config targets the given mock servers.
    pub(crate) fn with_services(services: &MockServices) -> Self {
        let ctx = Self::new();
        ctx.write_config(&services.config_toml());
        ctx
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.work_dir.join("escribe.toml")
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write escribe.toml");
    }

    /// Write a file relative to the work directory and return its path.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Build a command for the compiled `escribe` binary with the API key set.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env(API_KEY_ENV, API_KEY);
        cmd
    }

    /// Build a command with no API key in the environment.
    pub(crate) fn cli_without_key(&self) -> Command {
        let mut cmd = Command::cargo_bin("escribe").expect("Failed to locate escribe binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("ESCRIBE_CONFIG")
            .env_remove("ESCRIBE_LOG")
            .env_remove(API_KEY_ENV)
            .write_stdin("");
        cmd
    }
}
