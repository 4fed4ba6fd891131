//! Frontier - static path and props resolver for a content-driven site.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod core;
mod logger;
mod resolver;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Paths { json, .. } => cli::paths::run_paths(*json, &config),
        Commands::Props { url, pretty, .. } => cli::props::run_props(url, *pretty, &config),
        Commands::Build { clean, .. } => cli::build::run_build(*clean, &config),
    }
}
