//! Revisioned-file location.
//!
//! A revisioned file is an asset whose on-disk name carries a content
//! fingerprint (`1a2b3c4d.app.js`) for cache busting. The rewriter asks a
//! [`RevLocator`] to map each reference it finds to its revisioned name;
//! returning the input unchanged means "no revisioned copy exists, leave
//! the reference alone".

mod finder;
mod manifest;

pub use finder::DiskFinder;
pub use manifest::{Manifest, ManifestError};

/// Maps a logical asset reference to its revisioned name.
///
/// `context` is the directory of the document being processed,
/// site-relative. Implementations decide what counts as a real file:
/// external URLs, templating placeholders and the bare root `/` must pass
/// through unchanged.
pub trait RevLocator {
    fn find(&self, reference: &str, context: &str) -> String;
}

impl<T: RevLocator + ?Sized> RevLocator for &T {
    fn find(&self, reference: &str, context: &str) -> String {
        (**self).find(reference, context)
    }
}

/// Locator that never finds a revisioned copy. Used where only block
/// handling is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl RevLocator for PassThrough {
    fn find(&self, reference: &str, _context: &str) -> String {
        reference.to_string()
    }
}
