//! Settings resolution: command-line flags, then environment variables, then defaults.

use crate::manager::DEFAULT_MANAGER;
use crate::manifest::{MANIFEST_FILE_NAME, manifest_path};
use crate::version::LTS_ALIAS;
use std::path::{Path, PathBuf};

/// Environment variable naming the version manager executable.
pub const MANAGER_ENV: &str = "NVRUN_MANAGER";

/// Environment variable naming the fallback version alias.
pub const DEFAULT_VERSION_ENV: &str = "NVRUN_DEFAULT_VERSION";

/// Values given explicitly on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub manager: Option<String>,
    pub manifest: Option<PathBuf>,
    pub default_version: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Version manager executable, `nvs` unless overridden.
    pub manager: String,
    /// Absolute or cwd-relative path to `package.json`.
    pub manifest_path: PathBuf,
    /// Used when the manifest has no `engines.node`.
    pub default_version: String,
}

impl Settings {
    /// Defaults for a project rooted at `cwd`.
    #[must_use]
    pub fn for_dir(cwd: &Path) -> Self {
        Self {
            manager: DEFAULT_MANAGER.to_string(),
            manifest_path: manifest_path(cwd),
            default_version: LTS_ALIAS.to_string(),
        }
    }

    /// Resolve settings for a project rooted at `cwd`.
    ///
    /// `env` looks up environment variables; blank values count as unset.
    pub fn resolve<F>(overrides: Overrides, cwd: &Path, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::for_dir(cwd);

        let settings = Self {
            manager: overrides
                .manager
                .or_else(|| lookup(MANAGER_ENV))
                .unwrap_or(defaults.manager),
            manifest_path: overrides
                .manifest
                .map_or(defaults.manifest_path, |path| locate_manifest(cwd, &path)),
            default_version: overrides
                .default_version
                .or_else(|| lookup(DEFAULT_VERSION_ENV))
                .unwrap_or(defaults.default_version),
        };

        tracing::debug!(?settings, "resolved settings");
        settings
    }

    /// Resolve settings from the real process environment.
    pub fn from_env(overrides: Overrides, cwd: &Path) -> Self {
        Self::resolve(overrides, cwd, |key| std::env::var(key).ok())
    }
}

/// A manifest override may name the file itself or the directory holding it.
fn locate_manifest(cwd: &Path, path: &Path) -> PathBuf {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    if path.is_dir() {
        path.join(MANIFEST_FILE_NAME)
    } else {
        path
    }
}
