//! Shared helpers for CLI commands.

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::{self, ContentPool};
use crate::debug;
use crate::utils::plural_count;

/// Load the content pool every command resolves against.
///
/// Site data comes from the snapshot when the source carries one,
/// otherwise from `[site.info]` in the config.
pub fn load_pool(config: &SiteConfig) -> Result<ContentPool> {
    let source = config.content_path();
    let loaded = content::load(&source, &config.root)
        .with_context(|| format!("failed to load content from {}", source.display()))?;

    let site = loaded
        .site
        .unwrap_or_else(|| config.site.info.to_site_data());
    let pool = ContentPool::new(loaded.objects, site);
    debug!("content"; "pool holds {}", plural_count(pool.len(), "object"));
    Ok(pool)
}
