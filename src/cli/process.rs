//! `process` command: rewrite markup files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::Config;
use crate::rev::{DiskFinder, Manifest, RevLocator};
use crate::rewrite::Rewriter;
use crate::{block, debug, log};

/// Locator picked from CLI/config: a manifest when one is configured,
/// disk scanning otherwise.
enum Locator {
    Disk(DiskFinder),
    Manifest(Manifest),
}

impl RevLocator for Locator {
    fn find(&self, reference: &str, context: &str) -> String {
        match self {
            Self::Disk(finder) => finder.find(reference, context),
            Self::Manifest(manifest) => manifest.find(reference, context),
        }
    }
}

pub fn run(
    files: &[PathBuf],
    root: Option<PathBuf>,
    manifest: Option<PathBuf>,
    out_dir: Option<&Path>,
    dry: bool,
    config: &Config,
) -> Result<()> {
    let root = root.unwrap_or_else(|| config.rewrite.root.clone());
    let manifest_path = manifest.or_else(|| config.rewrite.manifest.clone());

    let locator = match manifest_path {
        Some(path) => {
            let manifest = Manifest::load(&path)
                .with_context(|| format!("loading manifest {}", path.display()))?;
            if manifest.is_empty() {
                log!("warn"; "manifest {} has no entries", path.display());
            } else {
                debug!("rev"; "manifest loaded, {} entries", manifest.len());
            }
            Locator::Manifest(manifest)
        }
        None => Locator::Disk(DiskFinder::new(&root)),
    };

    let rewrites = Arc::new(AtomicUsize::new(0));
    let block_counts: Vec<usize> = files
        .par_iter()
        .map(|file| process_file(file, &root, &locator, out_dir, dry, &rewrites))
        .collect::<Result<_>>()?;

    log!(
        "process";
        "{} file(s), {} block(s) collapsed, {} rewrite(s)",
        files.len(),
        block_counts.iter().sum::<usize>(),
        rewrites.load(Ordering::Relaxed)
    );
    Ok(())
}

fn process_file(
    file: &Path,
    root: &Path,
    locator: &Locator,
    out_dir: Option<&Path>,
    dry: bool,
    rewrites: &Arc<AtomicUsize>,
) -> Result<usize> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let doc = super::doc_rel_path(file, root);
    let marked = block::has_marker(&content);

    let counter = rewrites.clone();
    let rewriter = Rewriter::new(&doc, content, locator).with_sink(move |msg| {
        counter.fetch_add(1, Ordering::Relaxed);
        debug!("rev"; "{msg}");
    });

    if rewriter.blocks().is_empty() && marked {
        log!("warn"; "{doc}: build markers present but no complete block found");
    }

    let output = rewriter.process();

    if dry {
        debug!("process"; "{doc} (dry)");
        print!("{output}");
    } else {
        let target = match out_dir {
            Some(dir) => dir.join(&doc),
            None => file.to_path_buf(),
        };
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&target, output)
            .with_context(|| format!("writing {}", target.display()))?;
        debug!("process"; "wrote {}", target.display());
    }

    Ok(rewriter.blocks().len())
}
