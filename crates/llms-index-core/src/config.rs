//! Index configuration.
//!
//! The configuration is fixed for the whole run and passed explicitly into
//! the walker and renderers. Defaults match a typical docs repository with
//! `prompts/`, `guides/` and `cheatsheets/` sections.

use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the optional configuration file looked up in the scan root.
pub const CONFIG_FILE_NAME: &str = "llms-index.json";

/// Immutable settings for one index run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Lowercase extensions (with leading dot) listed in the full index.
    pub include_extensions: BTreeSet<String>,

    /// Entry names never descended into or recorded, at any depth.
    pub skip_directories: BTreeSet<String>,

    /// Sections probed for a README by the short index, in display order.
    pub top_sections: Vec<String>,

    /// Project name used in both document titles.
    pub project_name: String,

    /// Repository identifier used when none is supplied.
    pub fallback_repository: String,

    /// Base URL the repository identifier is appended to.
    pub endpoint_base: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            include_extensions: [".md"].into_iter().map(String::from).collect(),
            skip_directories: [".git", "node_modules", ".github"]
                .into_iter()
                .map(String::from)
                .collect(),
            top_sections: ["prompts", "guides", "cheatsheets"]
                .into_iter()
                .map(String::from)
                .collect(),
            project_name: "VinMemory".to_string(),
            fallback_repository: "vdeaugustine/VinMemory".to_string(),
            endpoint_base: "https://gitmcp.io".to_string(),
        }
    }
}

impl IndexConfig {
    /// Loads a configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| IndexError::read(path, e))?;
        let config = serde_json::from_str(&raw).map_err(|source| IndexError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `llms-index.json` from `root` if present, otherwise defaults.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Whether an entry with this file name must be skipped.
    pub fn is_skipped(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.skip_directories.contains(name))
    }

    /// Whether a file with this extension belongs in the full index.
    pub fn includes_extension(&self, extension: &str) -> bool {
        self.include_extensions.contains(extension)
    }
}
