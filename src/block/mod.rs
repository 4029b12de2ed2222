//! Build blocks: marker-delimited regions of markup destined to collapse
//! into a single built-artifact reference.
//!
//! A block looks like:
//!
//! ```html
//! <!-- build:js scripts/app.js -->
//! <script src="scripts/one.js"></script>
//! <script src="scripts/two.js"></script>
//! <!-- endbuild -->
//! ```

use serde::Serialize;

mod extract;

pub use extract::{extract, has_marker};

/// One detected build region.
///
/// All stored paths are site-relative forward-slash strings with no leading
/// `/` or `./`. Root origin is carried by `start_from_root` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Marker token (`js`, `css`, `js-concat`, ...). Any token is accepted;
    /// the token only decides the replacement tag shape.
    pub kind: String,
    /// Target artifact path. Joined with the document directory unless the
    /// marker path began with `/`, in which case it is site-root-relative.
    pub dest: String,
    /// True iff the marker path began with `/`.
    pub start_from_root: bool,
    /// Leading whitespace of the opening marker line, reused verbatim for
    /// the replacement line.
    pub indent: String,
    /// Asset references found inside the block, in document order, each
    /// joined with the document directory. May be empty or hold duplicates.
    pub src: Vec<String>,
    /// Exact original lines from opening to closing marker inclusive.
    /// Blank interior lines are counted. Used as the find-and-replace key.
    pub raw: Vec<String>,
    /// Module-loader wiring, present iff a `data-main` script tag was seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirejs: Option<RequireJs>,
}

/// Module-loader main-entry metadata attached to a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequireJs {
    /// The owning block's dest, copied.
    pub dest: String,
    /// Directory part of the main-entry path, joined with the document
    /// directory.
    pub base_url: String,
    /// Basename of the main-entry path. Extension stripping is left to the
    /// consumer building loader configuration.
    pub name: String,
}
