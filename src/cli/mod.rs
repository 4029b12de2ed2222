//! Command-line entry points.

mod args;

pub mod blocks;
pub mod process;

pub use args::{Cli, Commands};

use std::path::Path;

use crate::utils::path;

/// Site-relative document path: the file path with the root directory
/// stripped. Files outside the root keep their path as given.
pub(crate) fn doc_rel_path(file: &Path, root: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    path::normalize(&rel.to_string_lossy())
}
