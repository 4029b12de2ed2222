//! Downstream build-step routing derived from extracted blocks.
//!
//! The engine itself never concatenates or minifies. This module turns a
//! block list into the plain-data routing an external task runner needs:
//! which sources feed which concatenation target, which targets get
//! minified or css-processed afterwards, and how module-loader blocks are
//! bundled.

use serde::Serialize;

use crate::block::Block;

/// Concatenate `sources` (in order) into `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcatStep {
    pub dest: String,
    pub sources: Vec<String>,
}

/// Minify `source` in place of `dest` (source and dest usually coincide,
/// the concat output is minified where it stands).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinifyStep {
    pub dest: String,
    pub source: String,
}

/// Run CSS processing over `source` into `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssStep {
    pub dest: String,
    pub source: String,
}

/// Bundle a module-loader application: entry module `name` under
/// `base_url`, written to `out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleStep {
    pub out: String,
    pub base_url: String,
    pub name: String,
}

/// Complete routing for one document's blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub concat: Vec<ConcatStep>,
    pub minify: Vec<MinifyStep>,
    pub css: Vec<CssStep>,
    pub bundles: Vec<BundleStep>,
}

impl BuildPlan {
    /// Derive routing from blocks.
    ///
    /// - `js`: concat keyed by dest, then minify keyed by dest.
    /// - `js-concat`: concat only.
    /// - `css`: concat keyed by dest, then css processing keyed by dest.
    /// - `css-concat`: concat only.
    /// - module-loader blocks: a bundle step produces dest in place of a
    ///   concat step; dest still goes through minification. The entry
    ///   module name drops its `.js` extension here.
    /// - unknown kinds contribute nothing.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut plan = Self::default();

        for block in blocks {
            if let Some(rjs) = &block.requirejs {
                plan.bundles.push(BundleStep {
                    out: rjs.dest.clone(),
                    base_url: rjs.base_url.clone(),
                    name: rjs
                        .name
                        .strip_suffix(".js")
                        .unwrap_or(&rjs.name)
                        .to_string(),
                });
                plan.minify.push(MinifyStep {
                    dest: block.dest.clone(),
                    source: block.dest.clone(),
                });
                continue;
            }

            match block.kind.as_str() {
                "js" => {
                    plan.push_concat(block);
                    plan.minify.push(MinifyStep {
                        dest: block.dest.clone(),
                        source: block.dest.clone(),
                    });
                }
                "js-concat" => plan.push_concat(block),
                "css" => {
                    plan.push_concat(block);
                    plan.css.push(CssStep {
                        dest: block.dest.clone(),
                        source: block.dest.clone(),
                    });
                }
                "css-concat" => plan.push_concat(block),
                _ => {}
            }
        }

        plan
    }

    fn push_concat(&mut self, block: &Block) {
        self.concat.push(ConcatStep {
            dest: block.dest.clone(),
            sources: block.src.clone(),
        });
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.concat.is_empty()
            && self.minify.is_empty()
            && self.css.is_empty()
            && self.bundles.is_empty()
    }
}
