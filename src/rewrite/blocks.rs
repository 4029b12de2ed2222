//! Block replacement: collapsing a build region into one reference line.

use super::Rewriter;
use crate::block::Block;
use crate::rev::RevLocator;
use crate::utils::path;

impl<L: RevLocator> Rewriter<L> {
    /// Produce the single replacement line for a block.
    ///
    /// The artifact path is written relative to the document's directory,
    /// re-prefixed with `/` for root-origin blocks, with any backslash
    /// separators normalized. Unknown kinds yield an empty string, so the
    /// region disappears from the output; that is reported to the sink
    /// since it is an easy way to lose content silently.
    pub fn replace_with(&self, block: &Block) -> String {
        let dest = if block.start_from_root {
            format!("/{}", block.dest)
        } else {
            path::relative(&self.dir, &block.dest)
        };
        let dest = dest.replace('\\', "/");

        match block.kind.as_str() {
            "css" | "css-concat" => {
                format!("{}<link rel=\"stylesheet\" href=\"{}\">", block.indent, dest)
            }
            "js" | "js-concat" => {
                format!("{}<script src=\"{}\"></script>", block.indent, dest)
            }
            other => {
                self.emit(&format!(
                    "block kind `{other}` has no replacement, dropping region for {dest}"
                ));
                String::new()
            }
        }
    }

    /// Replace every block's raw span with its replacement line.
    ///
    /// Spans are consumed left to right over a cursor: each block's `raw`
    /// lines, joined with the document's line-ending convention, are
    /// searched for only in the text after the previous replacement. Two
    /// blocks with coincidentally identical raw text therefore each
    /// replace their own occurrence.
    pub fn replace_blocks(&self) -> String {
        let mut out = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        for block in &self.blocks {
            let needle = block.raw.join(self.eol);
            let Some(pos) = rest.find(&needle) else {
                continue;
            };
            out.push_str(&rest[..pos]);
            out.push_str(&self.replace_with(block));
            rest = &rest[pos + needle.len()..];
        }

        out.push_str(rest);
        out
    }
}
