//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shardcloud-action"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// A sandbox with fake `npm` and `shardcloud` executables on `PATH`.
///
/// Every fake call appends `<tool> <args> @ <cwd>` to `calls.log`. A fake
/// exits 1 when its first argument is `fail`, or when its name matches the
/// `FAKE_FAIL_TOOL` variable.
pub struct Sandbox {
    pub root: tempfile::TempDir,
    pub bin: PathBuf,
    pub project: PathBuf,
    pub calls_log: PathBuf,
    pub output_file: PathBuf,
}

#[cfg(unix)]
const FAKE_TOOL: &str = r#"#!/bin/sh
tool=$(basename "$0")
echo "$tool $* @ $(pwd -P)" >> "$FAKE_CALLS_LOG"
if [ "$1" = "fail" ] || [ "$FAKE_FAIL_TOOL" = "$tool" ]; then
  exit 1
fi
exit 0
"#;

impl Sandbox {
    #[cfg(unix)]
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let root = create_temp_dir();
        let bin = root.path().join("bin");
        let project = root.path().join("project");
        fs::create_dir_all(&bin).unwrap();
        fs::create_dir_all(&project).unwrap();

        for tool in ["npm", "shardcloud"] {
            let path = bin.join(tool);
            fs::write(&path, FAKE_TOOL).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let calls_log = root.path().join("calls.log");
        let output_file = root.path().join("github_output");
        let project = project.canonicalize().unwrap();

        Self {
            root,
            bin,
            project,
            calls_log,
            output_file,
        }
    }

    /// Command for the binary, isolated from any inputs set by a real runner.
    pub fn command(&self) -> Command {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.bin.clone()];
        paths.extend(std::env::split_paths(&path));

        let mut cmd = Command::new(get_binary_path());
        cmd.env("PATH", std::env::join_paths(paths).unwrap())
            .env("FAKE_CALLS_LOG", &self.calls_log)
            .env("GITHUB_OUTPUT", &self.output_file)
            .env_remove("INPUT_TOKEN")
            .env_remove("INPUT_COMMANDS")
            .env_remove("INPUT_WORKDIR")
            .env_remove("FAKE_FAIL_TOOL")
            .env_remove("RUST_LOG")
            .env_remove("RUNNER_DEBUG")
            .current_dir(self.root.path());
        cmd
    }

    /// Lines recorded by the fake tools, in call order.
    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.calls_log)
    }

    /// Lines the binary appended to the step output file.
    pub fn outputs(&self) -> Vec<String> {
        read_lines(&self.output_file)
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
