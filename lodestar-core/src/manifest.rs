//! Declarative mount configuration.
//!
//! A mount manifest is a TOML file naming the candidate-file extension and a
//! list of namespace mounts:
//!
//! ```toml
//! extension = "lua"
//!
//! [[mount]]
//! namespace = 'vendor\package'
//! path = "/srv/pkgs/vendor"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A set of namespace mounts loaded from a manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountManifest {
    /// Extension of candidate source files, without the leading dot.
    pub extension: String,

    #[serde(rename = "mount", default)]
    pub mounts: Vec<Mount>,
}

/// A single namespace-to-directory mount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mount {
    pub namespace: String,
    pub path: PathBuf,
}

impl MountManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Manifest(format!("Failed to read manifest: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Manifest(format!("Failed to parse manifest: {}", e)))
    }
}
