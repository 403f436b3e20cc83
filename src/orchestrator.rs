//! Resolve the project's Node version, make sure it is installed, then run the command under it.
//!
//! Steps run strictly one after another and never overlap:
//!
//! 1. locate the version manager
//! 2. load the manifest
//! 3. resolve the version
//! 4. `which <version>`
//! 5. `add <version>` when step 4 failed
//! 6. `exec <version> <command...>`

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::manager::{VersionManager, install_hint};
use crate::manifest::Manifest;
use crate::process::ProcessRunner;
use crate::reporter::Reporter;
use crate::version::VersionSpecifier;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub version: VersionSpecifier,
    /// Whether `add` was needed.
    pub installed: bool,
    /// Exit status of the delegated command.
    pub exit_code: i32,
}

pub struct Orchestrator<R: ProcessRunner, P: Reporter> {
    settings: Settings,
    runner: R,
    reporter: P,
}

impl<R: ProcessRunner, P: Reporter> Orchestrator<R, P> {
    #[must_use]
    pub fn new(settings: Settings, runner: R, reporter: P) -> Self {
        Self {
            settings,
            runner,
            reporter,
        }
    }

    /// Run `command` and return the exit status this process should end with.
    ///
    /// Any error is reported once through the reporter and mapped to its exit code.
    pub fn run(&mut self, command: &[String]) -> i32 {
        match self.try_run(command) {
            Ok(outcome) => outcome.exit_code,
            Err(e) => {
                self.reporter.failure(&e.to_string());
                e.exit_code()
            }
        }
    }

    /// Run `command` under the project's Node version.
    ///
    /// # Errors
    /// Fails when the version manager is missing, the manifest is missing or
    /// invalid, a child process cannot be started, or the install fails.
    pub fn try_run(&mut self, command: &[String]) -> Result<Outcome> {
        let Self {
            settings,
            runner,
            reporter,
        } = self;
        let mut manager = VersionManager::new(&settings.manager, runner);

        if !manager.is_available() {
            return Err(Error::ManagerNotFound {
                program: settings.manager.clone(),
                hint: install_hint(&settings.manager),
            });
        }

        let manifest = Manifest::load(&settings.manifest_path)?;
        let version = VersionSpecifier::resolve(&manifest, &settings.default_version);
        if version.is_default() {
            reporter.status(&format!(
                "No Node version found in package.json. Using {version}"
            ));
        } else {
            reporter.status(&format!("Using Node {version}"));
        }

        reporter.status(&format!("Checking for Node {version}"));
        let installed = if manager.is_installed(&version)? {
            tracing::debug!(%version, "already installed");
            false
        } else {
            reporter.status(&format!("Installing Node {version}"));
            let code = manager.add(&version)?;
            if code != 0 {
                return Err(Error::InstallFailed {
                    version: version.to_string(),
                    code,
                });
            }
            true
        };

        reporter.status(&format!("Running {}", command.join(" ")));
        let exit_code = manager.exec(&version, command)?;
        tracing::debug!(%version, exit_code, "command finished");

        Ok(Outcome {
            version,
            installed,
            exit_code,
        })
    }
}
