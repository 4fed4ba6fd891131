//! `paths` command: print every static path the site publishes.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::resolver::resolve_static_paths;

use super::common::load_pool;

pub fn run_paths(json: bool, config: &SiteConfig) -> Result<()> {
    let pool = load_pool(config)?;
    let paths = resolve_static_paths(&pool, &config.resolve_options());

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for path in &paths {
            println!("{path}");
        }
    }
    Ok(())
}
