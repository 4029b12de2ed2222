//! The reference-rewriting engine.
//!
//! A [`Rewriter`] is constructed per document from its path, its raw text
//! and a revisioned-file locator. Construction eagerly extracts build
//! blocks; callers either inspect [`Rewriter::blocks`] to wire downstream
//! build steps, or run the two-stage pipeline:
//!
//! 1. [`Rewriter::replace_blocks`] collapses each block into a single
//!    artifact reference;
//! 2. [`Rewriter::replace_with_revved`] redirects every remaining asset
//!    reference through the locator.
//!
//! [`Rewriter::process`] composes both. All operations are pure over the
//! in-memory text; the only I/O happens inside the injected locator.

mod blocks;
mod revved;

use crate::block::{self, Block};
use crate::rev::RevLocator;
use crate::utils::path;

/// Diagnostic callback invoked with human-readable progress entries.
pub type Sink = Box<dyn Fn(&str) + Send + Sync>;

/// Per-document rewriting engine.
pub struct Rewriter<L> {
    /// Document directory, site-relative (`""` for a root document).
    dir: String,
    content: String,
    /// Line-ending convention detected in the original text.
    eol: &'static str,
    blocks: Vec<Block>,
    locator: L,
    sink: Option<Sink>,
}

impl<L: RevLocator> Rewriter<L> {
    /// Build an engine for the document at `doc_path` (site-relative) with
    /// the given raw text. Blocks are extracted immediately.
    pub fn new(doc_path: &str, content: impl Into<String>, locator: L) -> Self {
        let content = content.into();
        let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let dir = path::dirname(&path::normalize(doc_path)).to_string();
        let blocks = block::extract(&dir, &content);
        Self {
            dir,
            content,
            eol,
            blocks,
            locator,
            sink: None,
        }
    }

    /// Install a diagnostic sink. Without one, diagnostics are dropped.
    pub fn with_sink(mut self, sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Blocks detected at construction, in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Document directory, site-relative.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Collapse blocks, then rewrite revisioned references.
    pub fn process(&self) -> String {
        self.replace_with_revved(&self.replace_blocks())
    }

    fn emit(&self, message: &str) {
        if let Some(sink) = &self.sink {
            sink(message);
        }
    }
}
