//! The nvs sub-commands this tool relies on.
//!
//! Exit status 0 means found/succeeded, anything else means not found/failed.

use crate::error::Result;
use crate::process::{Invocation, ProcessRunner};
use crate::version::VersionSpecifier;

/// Default version manager executable.
pub const DEFAULT_MANAGER: &str = "nvs";

const NVS_HOME_PAGE: &str = "https://github.com/jasongin/nvs";

/// Where to get `program` from, for the "not found" message.
#[must_use]
pub fn install_hint(program: &str) -> String {
    if program == DEFAULT_MANAGER {
        format!("Please install {program} first from {NVS_HOME_PAGE}")
    } else {
        format!("Please install {program} first or add it to your PATH")
    }
}

/// A version manager executable driven through a [`ProcessRunner`].
pub struct VersionManager<'a, R: ProcessRunner> {
    program: &'a str,
    runner: &'a mut R,
}

impl<'a, R: ProcessRunner> VersionManager<'a, R> {
    #[must_use]
    pub fn new(program: &'a str, runner: &'a mut R) -> Self {
        Self { program, runner }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        self.program
    }

    /// Whether the manager itself is on the search path.
    pub fn is_available(&mut self) -> bool {
        self.runner.locate(self.program)
    }

    /// `which <version>`: is a binary for `version` already installed?
    ///
    /// # Errors
    /// Fails only when the manager cannot be started.
    pub fn is_installed(&mut self, version: &VersionSpecifier) -> Result<bool> {
        let code = self.runner.run(&self.which(version))?;
        Ok(code == 0)
    }

    /// `add <version>`, output discarded. Returns the exit status.
    ///
    /// # Errors
    /// Fails only when the manager cannot be started.
    pub fn add(&mut self, version: &VersionSpecifier) -> Result<i32> {
        self.runner.run(&self.add_invocation(version))
    }

    /// `exec <version> <command...>` with output streamed. Returns the exit status.
    ///
    /// # Errors
    /// Fails only when the manager cannot be started.
    pub fn exec(&mut self, version: &VersionSpecifier, command: &[String]) -> Result<i32> {
        self.runner.run(&self.exec_invocation(version, command))
    }

    fn which(&self, version: &VersionSpecifier) -> Invocation {
        Invocation::new(self.program, ["which", version.as_str()])
    }

    fn add_invocation(&self, version: &VersionSpecifier) -> Invocation {
        Invocation::new(self.program, ["add", version.as_str()])
    }

    fn exec_invocation(&self, version: &VersionSpecifier, command: &[String]) -> Invocation {
        let args = ["exec", version.as_str()]
            .into_iter()
            .map(str::to_string)
            .chain(command.iter().cloned());
        Invocation::new(self.program, args).streaming()
    }
}
