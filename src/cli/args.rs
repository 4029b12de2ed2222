//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Revmark asset-reference rewriter CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Show per-reference rewrite diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: revmark.toml)
    #[arg(short = 'C', long, default_value = "revmark.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Collapse build blocks and rewrite revisioned asset references
    #[command(visible_alias = "p")]
    Process {
        /// Markup files to process
        #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Base directory searched for revisioned assets
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        root: Option<PathBuf>,

        /// JSON manifest mapping original to revisioned paths
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        manifest: Option<PathBuf>,

        /// Write results under this directory instead of in place
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        out_dir: Option<PathBuf>,

        /// Print results to stdout without writing any file
        #[arg(long)]
        dry: bool,
    },

    /// Extract build blocks and print them with the derived build plan
    #[command(visible_alias = "b")]
    Blocks {
        /// Markup files to inspect
        #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Base directory documents are addressed against
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        root: Option<PathBuf>,
    },
}
