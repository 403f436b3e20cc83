//! Error types for the version resolution and delegation workflow.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for every fatal condition raised before delegation.
pub const EXIT_FAILURE: i32 = 1;

/// Errors raised while resolving a Node version or delegating to the version manager.
#[derive(Debug, Error)]
pub enum Error {
    /// The version manager executable is not on the search path.
    #[error("{program} was not found in the PATH! {hint}")]
    ManagerNotFound { program: String, hint: String },

    #[error("No package.json found! Looking for \"{}\"", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Could not read \"{}\": {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package.json at \"{}\": {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The child process could not be created at all.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install Node {version} (exit status {code})")]
    InstallFailed { version: String, code: i32 },
}

impl Error {
    /// Process exit status the binary terminates with for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_not_found_message_contains_path() {
        let err = Error::ManifestNotFound {
            path: PathBuf::from("/work/app/package.json"),
        };
        assert_eq!(
            err.to_string(),
            "No package.json found! Looking for \"/work/app/package.json\""
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_manager_not_found_message_names_tool() {
        let err = Error::ManagerNotFound {
            program: "nvs".to_string(),
            hint: "Please install nvs first from https://github.com/jasongin/nvs".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("nvs was not found in the PATH!"));
        assert!(message.contains("https://github.com/jasongin/nvs"));
    }

    #[test]
    fn test_spawn_error_keeps_source() {
        let err = Error::Spawn {
            program: "nvs".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to start nvs:"));
    }
}
