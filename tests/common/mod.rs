#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Helper struct to run qaplan commands in an isolated temp directory
pub struct QaplanTest {
    pub temp_dir: TempDir,
    binary_path: &'static str,
}

impl QaplanTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        QaplanTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_qaplan"),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("QAPLAN_ROOT")
            .env_remove("QAPLAN_LOG");
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute qaplan command")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn qaplan command");

        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child
            .wait_with_output()
            .expect("Failed to wait for qaplan command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_success(args, &output)
    }

    pub fn run_success_with_stdin(&self, args: &[&str], input: &str) -> String {
        let output = self.run_with_stdin(args, input);
        assert_success(args, &output)
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_failure(args, &output)
    }

    pub fn run_failure_with_stdin(&self, args: &[&str], input: &str) -> String {
        let output = self.run_with_stdin(args, input);
        assert_failure(args, &output)
    }

    /// Write a file into the temp directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".qaplan");
        fs::create_dir_all(&dir).expect("Failed to create .qaplan directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.temp_dir.path().join(".qaplan").join("config.yaml")).ok()
    }
}

fn assert_success(args: &[&str], output: &Output) -> String {
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

fn assert_failure(args: &[&str], output: &Output) -> String {
    assert!(
        !output.status.success(),
        "Expected command {:?} to fail, but it succeeded",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}
