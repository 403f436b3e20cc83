//! The Node version a command should run under.

use crate::manifest::Manifest;
use std::fmt;

/// Symbolic alias nvs resolves to the current long-term-support release.
pub const LTS_ALIAS: &str = "lts";

/// Where a [`VersionSpecifier`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// `engines.node` in the manifest.
    Manifest,
    /// The configured fallback alias.
    Default,
}

/// A version, range or alias handed to the version manager untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpecifier {
    value: String,
    source: VersionSource,
}

impl VersionSpecifier {
    /// Pick the manifest's `engines.node`, or `default_alias` when the manifest names none.
    #[must_use]
    pub fn resolve(manifest: &Manifest, default_alias: &str) -> Self {
        match manifest.node_version() {
            Some(value) => Self {
                value: value.to_string(),
                source: VersionSource::Manifest,
            },
            None => Self {
                value: default_alias.to_string(),
                source: VersionSource::Default,
            },
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn source(&self) -> VersionSource {
        self.source
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.source == VersionSource::Default
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
