//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Frontier static path and props resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content source: a directory of documents or a snapshot file
    #[arg(short, long, value_hint = clap::ValueHint::AnyPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: frontier.toml)
    #[arg(short = 'C', long, default_value = "frontier.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print every static path the site publishes
    #[command(visible_alias = "p")]
    Paths {
        /// Print a JSON array instead of one path per line
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Print the resolved props for one path
    Props {
        /// URL path (e.g. /blog/page/2/) or an absolute URL
        url: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Resolve every path and write a props.json per page
    #[command(visible_alias = "b")]
    Build {
        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,

        #[command(flatten)]
        resolve: ResolveArgs,
    },
}

impl Commands {
    /// The resolution arguments every subcommand carries.
    pub fn resolve_args(&self) -> &ResolveArgs {
        match self {
            Self::Paths { resolve, .. }
            | Self::Props { resolve, .. }
            | Self::Build { resolve, .. } => resolve,
        }
    }
}

/// Shared resolution arguments
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Include draft documents (preview mode)
    #[arg(short = 'D', long)]
    pub preview: bool,

    /// Override the default feed page size
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
