//! # nvrun
//!
//! Run a command under the Node.js version a project asks for in its
//! `package.json` (`engines.node`), letting [nvs](https://github.com/jasongin/nvs)
//! install that version first when it is missing.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod manifest;
pub mod orchestrator;
pub mod process;
pub mod reporter;
pub mod version;

use reporter::{Reporter, TerminalReporter};

/// Report `message` as a failure and return the exit status to end with.
pub fn report_fatal(reporter: &mut impl Reporter, message: &str) -> i32 {
    reporter.failure(message);
    error::EXIT_FAILURE
}

/// Print an error message in the failure style and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    let code = report_fatal(&mut TerminalReporter::new(), message);
    std::process::exit(code);
}
