//! Site configuration management for `frontier.toml`.
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[site.info]` | Site metadata (title, description, url, extra)   |
//! | `[build]`     | Content source, output dir, page size, preview   |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{BuildSectionConfig, SiteInfoConfig, SiteSectionConfig};
pub use util::extract_url_path;

use util::find_config_file;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::log;
use crate::resolver::ResolveOptions;

/// Root configuration structure representing frontier.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory. CLI flags override config
    /// values after parsing.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::NotFound(cli.config.clone()));
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.apply_cli_options(cli);

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply CLI overrides on top of the parsed config.
    fn apply_cli_options(&mut self, cli: &Cli) {
        let resolve = cli.command.resolve_args();
        crate::logger::set_verbose(resolve.verbose);

        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        if resolve.preview {
            self.build.preview = true;
        }
        if let Some(page_size) = resolve.page_size {
            self.build.page_size = page_size;
        }
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute path of the content source.
    pub fn content_path(&self) -> PathBuf {
        self.root_join(&self.build.content)
    }

    /// Absolute path of the output directory.
    pub fn output_path(&self) -> PathBuf {
        self.root_join(&self.build.output)
    }

    /// Resolution knobs derived from the effective config.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            include_drafts: self.build.preview,
            default_page_size: self.build.page_size,
        }
    }
}
