//! Disk-backed revisioned-file lookup.

use std::path::PathBuf;

use super::RevLocator;
use crate::core::RefKind;
use crate::utils::path;

/// Finds revisioned files by listing the directory a reference points
/// into, under a fixed base directory (typically the build output root).
///
/// A candidate matches when its name is the reference's basename prefixed
/// with a hex fingerprint and a dot, e.g. `app.js` matches `1a2b3c4d.app.js`.
#[derive(Debug, Clone)]
pub struct DiskFinder {
    base: PathBuf,
}

impl DiskFinder {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Look up a site-relative path, returning the revisioned site-relative
    /// path when a fingerprinted copy exists next to where it points.
    fn lookup(&self, site_path: &str) -> Option<String> {
        let dir = path::dirname(site_path);
        let name = path::basename(site_path);
        if name.is_empty() {
            return None;
        }

        let fs_dir = if dir.is_empty() {
            self.base.clone()
        } else {
            self.base.join(dir)
        };

        for entry in std::fs::read_dir(&fs_dir).ok()?.flatten() {
            let candidate = entry.file_name();
            let Some(candidate) = candidate.to_str() else {
                continue;
            };
            if is_revved_of(candidate, name) {
                return Some(path::join(dir, candidate));
            }
        }
        None
    }
}

impl RevLocator for DiskFinder {
    fn find(&self, reference: &str, context: &str) -> String {
        match RefKind::parse(reference) {
            RefKind::External(_) | RefKind::Template(_) | RefKind::Root => reference.to_string(),
            RefKind::SiteRoot(rest) => match self.lookup(&path::normalize(rest)) {
                Some(revved) => format!("/{revved}"),
                None => reference.to_string(),
            },
            RefKind::Relative(rel) => match self.lookup(&path::join(context, rel)) {
                // Keep the reference's own directory prefix, only the
                // basename changes.
                Some(revved) => path::with_basename(reference, path::basename(&revved)),
                None => reference.to_string(),
            },
        }
    }
}

/// True when `candidate` is `name` prefixed with `<hex>.`.
fn is_revved_of(candidate: &str, name: &str) -> bool {
    candidate
        .strip_suffix(name)
        .and_then(|prefix| prefix.strip_suffix('.'))
        .is_some_and(|fp| {
            !fp.is_empty() && fp.len() <= 32 && fp.chars().all(|c| c.is_ascii_hexdigit())
        })
}
