//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stand-in for nvs: logs its arguments, answers `which` from a state
/// directory, marks versions installed on `add` and runs the command on `exec`.
const FAKE_NVS: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "$NVS_LOG"
case "$1" in
  which) [ -e "$NVS_STATE/$2" ] ;;
  add) echo "downloading node $2"; : > "$NVS_STATE/$2"; exit "${NVS_ADD_STATUS:-0}" ;;
  exec) shift 2; exec "$@" ;;
  *) exit 64 ;;
esac
"#;

/// Path of the compiled binary under test.
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nvrun"))
}

/// A scratch project with its own `bin/` directory used as `PATH`.
pub struct Sandbox {
    pub dir: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        for sub in ["bin", "state", "project"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        Self { dir }
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    pub fn project(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("nvs.log")
    }

    /// Install the fake version manager under `name`.
    #[cfg(unix)]
    pub fn install_fake_manager(&self, name: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin().join(name);
        fs::write(&path, FAKE_NVS).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Pretend `version` was added earlier.
    pub fn mark_installed(&self, version: &str) {
        fs::write(self.dir.path().join("state").join(version), "").unwrap();
    }

    pub fn write_manifest(&self, content: &str) {
        create_manifest(&self.project(), content);
    }

    /// Arguments the fake manager received, one invocation per entry.
    pub fn manager_calls(&self) -> Vec<String> {
        match fs::read_to_string(self.log_path()) {
            Ok(log) => log.lines().map(String::from).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Command for the binary, run inside the project with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_binary_path());
        cmd.current_dir(self.project())
            .env_clear()
            .env("PATH", format!("{}:/usr/bin:/bin", self.bin().display()))
            .env("NVS_LOG", self.log_path())
            .env("NVS_STATE", self.dir.path().join("state"));
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute command")
    }
}

/// Helper to create a package.json in a directory
pub fn create_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("package.json"), content).unwrap();
}
