//! Line-oriented block extraction.
//!
//! A two-state machine {Outside, Inside(current)} walks the document once.
//! Markers never nest: a second opening marker while inside discards the
//! unfinished block and starts a new one, and an open block with no closing
//! marker is dropped at end of input.

use std::sync::LazyLock;

use regex::Regex;

use super::{Block, RequireJs};
use crate::utils::path;

/// Opening marker: `<!-- build:<token> <path> -->`.
static RE_BUILD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--[ \t]*build:([A-Za-z0-9_-]+)[ \t]+([^ \t]+)[ \t]*-->").unwrap()
});

/// Closing marker: `<!-- endbuild -->`, whitespace-tolerant.
static RE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--[ \t]*endbuild[ \t]*-->").unwrap());

/// First `href`/`src` attribute on a line.
static RE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:href|src)=["']([^"']+)["']"#).unwrap());

/// Module-loader main-entry attribute.
static RE_MAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-main=["']([^"']+)["']"#).unwrap());

/// Check whether text contains an opening marker at all.
///
/// Extraction yielding zero blocks while this is true usually means an
/// unclosed marker pair, worth surfacing to the caller.
pub fn has_marker(content: &str) -> bool {
    RE_BUILD.is_match(content)
}

/// Extract every well-formed block from `content`, in document order.
///
/// `dir` is the document's directory, site-relative (`""` for a document at
/// the root). Line endings may be LF or CRLF; `raw` stores lines without
/// the terminator either way.
pub fn extract(dir: &str, content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(caps) = RE_BUILD.captures(line) {
            let indent = &line[..line.len() - line.trim_start().len()];
            let marker_path = caps.get(2).map_or("", |m| m.as_str());
            let (start_from_root, dest) = match marker_path.strip_prefix('/') {
                Some(rest) => (true, path::normalize(rest)),
                None => (false, path::join(dir, marker_path)),
            };
            // Replaces any still-open block; the unfinished one is dropped.
            current = Some(Block {
                kind: caps[1].to_string(),
                dest,
                start_from_root,
                indent: indent.to_string(),
                src: Vec::new(),
                raw: Vec::new(),
                requirejs: None,
            });
        }

        if RE_END.is_match(line) {
            if let Some(mut block) = current.take() {
                block.raw.push(line.to_string());
                blocks.push(block);
            }
            continue;
        }

        if let Some(block) = current.as_mut() {
            if let Some(caps) = RE_REF.captures(line) {
                block.src.push(path::join(dir, &caps[1]));
            }
            if let Some(caps) = RE_MAIN.captures(line) {
                let main = path::normalize(&caps[1]);
                block.requirejs = Some(RequireJs {
                    dest: block.dest.clone(),
                    base_url: path::join(dir, path::dirname(&main)),
                    name: path::basename(&main).to_string(),
                });
                // The loader output is itself an input to later build steps.
                block.src.push(block.dest.clone());
            }
            block.raw.push(line.to_string());
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_CSS: &str = "<!-- build:css foo.css -->\n\
                              <link rel=\"stylesheet\" href=\"bar.css\">\n\
                              <!-- endbuild -->";

    #[test]
    fn test_single_css_block() {
        let blocks = extract("", SIMPLE_CSS);
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(block.kind, "css");
        assert_eq!(block.dest, "foo.css");
        assert!(!block.start_from_root);
        assert_eq!(block.src, vec!["bar.css"]);
        assert_eq!(block.raw.len(), 3);
        assert_eq!(block.raw[0], "<!-- build:css foo.css -->");
        assert_eq!(block.raw[2], "<!-- endbuild -->");
    }

    #[test]
    fn test_document_directory_applied() {
        let blocks = extract("build", "<!-- build:css bar/foo.css -->\n<link rel=\"stylesheet\" href=\"bar.css\">\n<!-- endbuild -->");
        assert_eq!(blocks[0].dest, "build/bar/foo.css");
        assert_eq!(blocks[0].src, vec!["build/bar.css"]);
    }

    #[test]
    fn test_root_relative_dest() {
        let blocks = extract(
            "app",
            "<!-- build:css /foo/css/site.css -->\n<!-- endbuild -->",
        );
        assert_eq!(blocks[0].dest, "foo/css/site.css");
        assert!(blocks[0].start_from_root);
    }

    #[test]
    fn test_blocks_in_document_order() {
        let content = "\
<!-- build:js out/a.js -->
<script src=\"a.js\"></script>
<!-- endbuild -->
text between
<!-- build:css out/b.css -->
<link href=\"b.css\">
<!-- endbuild -->";
        let blocks = extract("", content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].dest, "out/a.js");
        assert_eq!(blocks[1].dest, "out/b.css");
    }

    #[test]
    fn test_blank_lines_counted_in_raw() {
        let content = "<!-- build:js app.js -->\n\n<script src=\"a.js\"></script>\n\n<!-- endbuild -->";
        let blocks = extract("", content);
        assert_eq!(blocks[0].raw.len(), 5);
        assert_eq!(blocks[0].raw[1], "");
        assert_eq!(blocks[0].src, vec!["a.js"]);
    }

    #[test]
    fn test_duplicate_sources_kept() {
        let content = "<!-- build:js app.js -->\n<script src=\"a.js\"></script>\n<script src=\"a.js\"></script>\n<!-- endbuild -->";
        let blocks = extract("", content);
        assert_eq!(blocks[0].src, vec!["a.js", "a.js"]);
    }

    #[test]
    fn test_indent_captured() {
        let content = "    <!-- build:js app.js -->\n    <script src=\"a.js\"></script>\n    <!-- endbuild -->";
        let blocks = extract("", content);
        assert_eq!(blocks[0].indent, "    ");
    }

    #[test]
    fn test_tab_indent_captured() {
        let content = "\t<!-- build:js app.js -->\n\t<!-- endbuild -->";
        let blocks = extract("", content);
        assert_eq!(blocks[0].indent, "\t");
    }

    #[test]
    fn test_unclosed_block_dropped() {
        let content = "<!-- build:js app.js -->\n<script src=\"a.js\"></script>\n";
        assert!(extract("", content).is_empty());
        assert!(has_marker(content));
    }

    #[test]
    fn test_second_opener_discards_unfinished_block() {
        let content = "\
<!-- build:js first.js -->
<script src=\"one.js\"></script>
<!-- build:js second.js -->
<script src=\"two.js\"></script>
<!-- endbuild -->";
        let blocks = extract("", content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].dest, "second.js");
        assert_eq!(blocks[0].src, vec!["two.js"]);
    }

    #[test]
    fn test_permissive_kind_token() {
        let blocks = extract("", "<!-- build:remove foo -->\n<!-- endbuild -->");
        assert_eq!(blocks[0].kind, "remove");

        let blocks = extract("", "<!-- build:css-concat all.css -->\n<!-- endbuild -->");
        assert_eq!(blocks[0].kind, "css-concat");
    }

    #[test]
    fn test_whitespace_tolerant_markers() {
        let content = "<!--  build:js  app.js  -->\n<!--   endbuild   -->";
        let blocks = extract("", content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].dest, "app.js");
    }

    #[test]
    fn test_crlf_lines() {
        let content = "<!-- build:css foo.css -->\r\n<link href=\"bar.css\">\r\n<!-- endbuild -->\r\n";
        let blocks = extract("", content);
        assert_eq!(blocks.len(), 1);
        // raw lines carry no terminator
        assert_eq!(blocks[0].raw[0], "<!-- build:css foo.css -->");
        assert_eq!(blocks[0].src, vec!["bar.css"]);
    }

    #[test]
    fn test_windows_separators_normalized() {
        let blocks = extract(
            "build",
            "<!-- build:js scripts\\app.js -->\n<script src=\"scripts\\one.js\"></script>\n<!-- endbuild -->",
        );
        assert_eq!(blocks[0].dest, "build/scripts/app.js");
        assert_eq!(blocks[0].src, vec!["build/scripts/one.js"]);
    }

    #[test]
    fn test_requirejs_metadata() {
        let content = "\
<!-- build:js scripts/amd-app.js -->
<script data-main=\"scripts/main\" src=\"scripts/vendor/require.js\"></script>
<!-- endbuild -->";
        let blocks = extract("build", content);
        let block = &blocks[0];
        assert_eq!(block.dest, "build/scripts/amd-app.js");

        let rjs = block.requirejs.as_ref().unwrap();
        assert_eq!(rjs.dest, "build/scripts/amd-app.js");
        assert_eq!(rjs.base_url, "build/scripts");
        assert_eq!(rjs.name, "main");

        // the require.js tag itself plus the block's own dest
        assert_eq!(
            block.src,
            vec!["build/scripts/vendor/require.js", "build/scripts/amd-app.js"]
        );
    }

    #[test]
    fn test_no_blocks_in_plain_text() {
        assert!(extract("", "<p>no markers here</p>\n").is_empty());
        assert!(!has_marker("<p>no markers here</p>\n"));
    }
}
