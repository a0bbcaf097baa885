//! Test environment for running the vendorclean binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use super::fixtures::{files_under, write_fixture_project};

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json {l:?}: {e}")))
            .collect()
    }
}

/// Isolated project directory and config home.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            config_home: tempfile::tempdir().expect("config tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_vendorclean")),
        }
    }

    /// Project holding the reference vendor tree and glide.lock
    pub fn with_fixture() -> Self {
        let env = Self::new();
        write_fixture_project(env.project_root.path());
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn vendor_files(&self) -> std::collections::BTreeSet<String> {
        files_under(&self.project_path("vendor"))
    }

    /// Write a file inside the project
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create dirs");
        }
        std::fs::write(path, content).expect("write file");
    }

    /// Run with the project root as positional argument
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.arg(self.project_root.path()).args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("failed to execute vendorclean"))
    }

    /// Run from a working directory without the positional root
    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = self.command();
        cmd.current_dir(cwd).args(args);
        to_result(cmd.output().expect("failed to execute vendorclean"))
    }

    /// Command with stdin closed and config lookups confined to the test env
    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.stdin(Stdio::null())
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("VENDORCLEAN_LOG");
        for key in [
            "VENDORCLEAN_ONLY_GO",
            "VENDORCLEAN_NO_TESTS",
            "VENDORCLEAN_KEEP_LEGAL_FILES",
            "VENDORCLEAN_USE_LOCK_FILE",
            "VENDORCLEAN_KEEP",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
