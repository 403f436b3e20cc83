//! Command-line parsing and the top-level entry point.

use crate::config::{Overrides, Settings};
use crate::orchestrator::Orchestrator;
use crate::process::SystemRunner;
use crate::reporter::TerminalReporter;
use crate::{fatal_error, logging};
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for nvrun.
#[derive(ClapParser, Debug)]
#[command(name = "nvrun")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Run a command under the Node version pinned in package.json",
    long_about = None
)]
pub struct Cli {
    /// Manifest file, or a directory containing package.json (default: ./package.json)
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Version manager executable [env: NVRUN_MANAGER] [default: nvs]
    #[arg(long, value_name = "PROGRAM")]
    manager: Option<String>,

    /// Version used when package.json has no engines.node [env: NVRUN_DEFAULT_VERSION] [default: lts]
    #[arg(long, value_name = "VERSION")]
    default_version: Option<String>,

    /// Command to run, passed through unchanged
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            manager: self.manager.clone(),
            manifest: self.manifest.clone(),
            default_version: self.default_version.clone(),
        }
    }

    #[must_use]
    pub fn command(&self) -> &[String] {
        &self.command
    }
}

/// Main CLI logic: parse arguments, run the workflow and exit with its status.
pub fn run_cli() {
    let cli = Cli::parse();
    logging::init();

    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        fatal_error(&format!("Error: cannot determine the current directory: {e}"))
    });
    let settings = Settings::from_env(cli.overrides(), &cwd);

    let code = Orchestrator::new(settings, SystemRunner::new(), TerminalReporter::new())
        .run(cli.command());
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("nvrun").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_taken_verbatim() {
        let cli = parse(&["npm", "test", "--watch", "-x", "a b"]).unwrap();
        assert_eq!(cli.command(), ["npm", "test", "--watch", "-x", "a b"]);
    }

    #[test]
    fn test_flags_before_command() {
        let cli = parse(&[
            "--manager",
            "/opt/nvs",
            "--default-version",
            "latest",
            "--manifest",
            "app",
            "node",
            "--version",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.manager.as_deref(), Some("/opt/nvs"));
        assert_eq!(overrides.default_version.as_deref(), Some("latest"));
        assert_eq!(overrides.manifest, Some(PathBuf::from("app")));
        assert_eq!(cli.command(), ["node", "--version"]);
    }

    #[test]
    fn test_flags_after_command_belong_to_command() {
        let cli = parse(&["node", "--manager", "x"]).unwrap();
        assert_eq!(cli.overrides().manager, None);
        assert_eq!(cli.command(), ["node", "--manager", "x"]);
    }

    #[test]
    fn test_command_is_required() {
        assert!(parse(&[]).is_err());
    }
}
