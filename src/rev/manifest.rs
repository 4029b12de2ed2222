//! Manifest-backed revisioned-file lookup.
//!
//! A rev task can emit a JSON object mapping original to revisioned paths:
//!
//! ```json
//! { "scripts/app.js": "scripts/1a2b3c4d.app.js" }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::RevLocator;
use crate::core::RefKind;

/// Manifest loading errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("manifest parsing error")]
    Json(#[from] serde_json::Error),
}

/// Locator backed by an in-memory original → revisioned map.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: FxHashMap<String, String>,
}

impl Manifest {
    /// Load a JSON manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ManifestError::Io(path.to_path_buf(), e))?;
        let entries: FxHashMap<String, String> = serde_json::from_str(&text)?;
        Ok(Self { entries })
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RevLocator for Manifest {
    fn find(&self, reference: &str, _context: &str) -> String {
        if RefKind::parse(reference).is_fixed() {
            return reference.to_string();
        }
        if let Some(revved) = self.entries.get(reference) {
            return revved.clone();
        }
        // Manifests commonly store paths without the leading slash.
        if let RefKind::SiteRoot(rest) = RefKind::parse(reference) {
            if let Some(revved) = self.entries.get(rest) {
                return format!("/{}", revved.trim_start_matches('/'));
            }
        }
        reference.to_string()
    }
}
