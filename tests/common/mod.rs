#![allow(dead_code)]

pub mod fake_backend;
pub mod mock_data;
pub mod stub_server;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run slaboard commands against an isolated config file
pub struct SlaTest {
    pub temp_dir: TempDir,
    binary_path: &'static str,
}

impl SlaTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        SlaTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_slaboard"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("SLABOARD_CONFIG", self.config_path())
            .env_remove("SLABOARD_API_URL")
            .env_remove("SLABOARD_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute slaboard command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }
}
