//! `build` command: resolve every path and write a `props.json` per page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::ContentPool;
use crate::core::UrlPath;
use crate::resolver::{ResolveOptions, resolve_static_paths, resolve_static_props};
use crate::utils::plural_count;
use crate::{debug, log};

use super::common::load_pool;
use super::props::props_value;

pub fn run_build(clean: bool, config: &SiteConfig) -> Result<()> {
    let output = config.output_path();
    if clean && output.exists() {
        fs::remove_dir_all(&output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }

    let pool = load_pool(config)?;
    let opts = config.resolve_options();
    let paths = resolve_static_paths(&pool, &opts);

    // Pages are independent, so resolution and writing parallelize per path.
    paths
        .par_iter()
        .try_for_each(|path| write_page(path, &pool, &opts, &output))?;

    log!("build"; "wrote {} to {}", plural_count(paths.len(), "page"), output.display());
    Ok(())
}

fn write_page(
    path: &UrlPath,
    pool: &ContentPool,
    opts: &ResolveOptions,
    output: &Path,
) -> Result<()> {
    let Some(props) = resolve_static_props(path, pool, opts) else {
        debug!("build"; "no props for {}, skipped", path);
        return Ok(());
    };

    let dir = page_output_dir(output, path);
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let file = dir.join("props.json");
    let json = serde_json::to_vec_pretty(&props_value(&props))?;
    fs::write(&file, json).with_context(|| format!("failed to write {}", file.display()))?;
    debug!("build"; "{}", file.display());
    Ok(())
}

/// `/blog/page/2/` lands at `<output>/blog/page/2/props.json`.
fn page_output_dir(output: &Path, path: &UrlPath) -> PathBuf {
    let rel = path.as_str().trim_matches('/');
    if rel.is_empty() {
        output.to_path_buf()
    } else {
        output.join(rel)
    }
}
