//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the minitools binary
pub fn minitools_bin() -> &'static str {
    env!("CARGO_BIN_EXE_minitools")
}

/// An isolated config + data directory that lives as long as the value.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    /// Creates a fresh, empty environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The `MINITOOLS_CONFIG_DIR` used by commands from this environment.
    pub fn config_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Default data directory under the config dir.
    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Builds a command with the isolated config directory.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(minitools_bin());
        cmd.env("MINITOOLS_CONFIG_DIR", self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Runs a command and returns its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs a command that must succeed and returns its stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_eq!(
            output.status.code(),
            Some(0),
            "{args:?} should succeed. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Runs a command that must succeed and parses its stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout).expect("Should parse JSON output")
    }

    /// Writes a file into the environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Rates file content quoting `rates` against USD.
pub fn usd_rates_json(rates: &[(&str, f64)]) -> String {
    let rates: serde_json::Map<String, serde_json::Value> = rates
        .iter()
        .map(|(code, rate)| ((*code).to_string(), serde_json::json!(rate)))
        .collect();
    serde_json::json!({ "base": "USD", "rates": rates }).to_string()
}

/// Stdout of an output as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of an output as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
