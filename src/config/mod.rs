//! Configuration loading (`revmark.toml`).
//!
//! ```toml
//! [rewrite]
//! root = "dist"
//! manifest = "rev-manifest.json"
//! ```
//!
//! CLI flags override config values; everything has a working default so
//! running without a config file is fine.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rewrite: RewriteSection,
}

/// `[rewrite]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriteSection {
    /// Base directory searched for revisioned assets. Document paths are
    /// made relative to this directory before processing.
    pub root: PathBuf,
    /// Optional JSON manifest mapping original to revisioned paths. When
    /// set, disk scanning is skipped in favor of the manifest.
    pub manifest: Option<PathBuf>,
}

impl Default for RewriteSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Ok(toml::from_str(&text)?)
    }

    /// Load configuration, falling back to defaults when the file does not
    /// exist. Parse errors in an existing file still fail.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
