//! `package.json` discovery and loading.
//!
//! Only `engines.node` is consumed; every other field is ignored.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name looked up inside a project directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// The part of `package.json` this tool cares about.
///
/// Any valid JSON document is accepted. `engines.node` is only picked up when
/// `engines` is an object and `node` is a non-empty string or a non-zero number;
/// every other shape reads as "no version requested".
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct Manifest {
    node: Option<String>,
}

impl From<Value> for Manifest {
    fn from(document: Value) -> Self {
        let node = match document.pointer("/engines/node") {
            Some(Value::String(node)) if !node.is_empty() => Some(node.clone()),
            Some(Value::Number(number)) if number.as_f64() != Some(0.0) => {
                Some(number.to_string())
            }
            _ => None,
        };
        Self { node }
    }
}

/// Path of the manifest inside `dir`.
#[must_use]
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE_NAME)
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    /// `ManifestNotFound` when the file does not exist, `ManifestRead` when it
    /// cannot be read and `ManifestParse` when it is not a valid manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                Error::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::ManifestRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read manifest");

        serde_json::from_str(&content).map_err(|source| Error::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse manifest JSON that is already in memory.
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// `engines.node`, unless it is missing or empty.
    #[must_use]
    pub fn node_version(&self) -> Option<&str> {
        self.node.as_deref()
    }
}
