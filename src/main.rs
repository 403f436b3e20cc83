//! # nvrun
//!
//! Run a command with the Node.js version pinned in `./package.json`.
//!
//! ## Usage
//!
//! - Run the tests: `nvrun npm test`
//! - Start a script: `nvrun node server.js --port 8080`
//! - Use another manifest: `nvrun --manifest ../app npm run build`
//!
//! Without `engines.node` the current LTS release is used.

/// Entry point for the CLI tool.
fn main() {
    nvrun::cli::run_cli();
}
