//! Launching external programs and collecting their exit status.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// What happens to a child's stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Output is discarded.
    #[default]
    Quiet,
    /// Output goes straight to our own stdout/stderr while the child runs.
    Stream,
}

/// One external command: a program and its argument vector, never a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub output: OutputMode,
}

impl Invocation {
    #[must_use]
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            output: OutputMode::Quiet,
        }
    }

    #[must_use]
    pub fn streaming(mut self) -> Self {
        self.output = OutputMode::Stream;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external programs on behalf of the orchestrator.
pub trait ProcessRunner {
    /// Whether `program` can be found on the search path.
    fn locate(&mut self, program: &str) -> bool;

    /// Run `invocation` to completion and return its exit status.
    ///
    /// A non-zero status is a normal result; only a failure to start the
    /// process at all is an error.
    ///
    /// # Errors
    /// `Error::Spawn` when the child process cannot be created.
    fn run(&mut self, invocation: &Invocation) -> Result<i32>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &mut R {
    fn locate(&mut self, program: &str) -> bool {
        (**self).locate(program)
    }

    fn run(&mut self, invocation: &Invocation) -> Result<i32> {
        (**self).run(invocation)
    }
}

/// [`ProcessRunner`] backed by real child processes.
///
/// Children inherit the working directory, environment and stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn locate(&mut self, program: &str) -> bool {
        match which::which(program) {
            Ok(path) => {
                tracing::debug!(program, path = %path.display(), "located executable");
                true
            }
            Err(e) => {
                tracing::debug!(program, error = %e, "executable not located");
                false
            }
        }
    }

    fn run(&mut self, invocation: &Invocation) -> Result<i32> {
        // Resolving through `which` picks up `nvs.cmd` and friends on Windows.
        let executable = which::which(&invocation.program).map_or_else(
            |_| OsString::from(&invocation.program),
            PathBuf::into_os_string,
        );

        let mut cmd = Command::new(executable);
        cmd.args(&invocation.args);

        match invocation.output {
            OutputMode::Quiet => {
                cmd.stdout(Stdio::null()).stderr(Stdio::null());
            }
            OutputMode::Stream => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
        }

        tracing::debug!(command = %invocation, output = ?invocation.output, "spawning");

        let status = cmd.status().map_err(|source| {
            tracing::error!(program = %invocation.program, error = %source, "failed to spawn");
            Error::Spawn {
                program: invocation.program.clone(),
                source,
            }
        })?;

        let code = exit_code(status);
        tracing::debug!(command = %invocation, code, "finished");
        Ok(code)
    }
}

/// Numeric exit status, following the shell convention of `128 + signal`
/// for children killed by a signal.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
