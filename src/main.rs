//! Revmark - build-block collapsing and revisioned asset-reference
//! rewriting for static-site build pipelines.

mod block;
mod cli;
mod config;
mod core;
mod logger;
mod plan;
mod rev;
mod rewrite;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Process {
            files,
            root,
            manifest,
            out_dir,
            dry,
        } => cli::process::run(&files, root, manifest, out_dir.as_deref(), dry, &config),
        Commands::Blocks { files, root } => cli::blocks::run(&files, root, &config),
    }
}
