//! `blocks` command: dump extracted blocks and the derived build plan.
//!
//! Output is one JSON document per file, ready for external build-graph
//! wiring (which sources to concatenate where, what to minify, how to
//! bundle module-loader apps).

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;

use crate::config::Config;
use crate::log;
use crate::plan::BuildPlan;
use crate::rev::PassThrough;
use crate::rewrite::Rewriter;
use crate::block;

pub fn run(files: &[PathBuf], root: Option<PathBuf>, config: &Config) -> Result<()> {
    let root = root.unwrap_or_else(|| config.rewrite.root.clone());

    for file in files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("reading {}", file.display()))?;
        let doc = super::doc_rel_path(file, &root);
        let marked = block::has_marker(&content);

        let rewriter = Rewriter::new(&doc, content, PassThrough);
        if rewriter.blocks().is_empty() && marked {
            log!("warn"; "{doc}: build markers present but no complete block found");
        }

        let payload = json!({
            "file": doc,
            "blocks": rewriter.blocks(),
            "plan": BuildPlan::from_blocks(rewriter.blocks()),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
