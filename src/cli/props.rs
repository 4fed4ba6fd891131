//! `props` command: print the resolved props for one path.

use anyhow::{Result, bail};
use serde_json::{Value as JsonValue, json};

use crate::config::{SiteConfig, extract_url_path};
use crate::core::UrlPath;
use crate::resolver::{ResolvedProps, resolve_static_props};

use super::common::load_pool;

pub fn run_props(url: &str, pretty: bool, config: &SiteConfig) -> Result<()> {
    let path = parse_url_arg(url);
    let pool = load_pool(config)?;

    let Some(props) = resolve_static_props(&path, &pool, &config.resolve_options()) else {
        bail!("no page resolves for {}", path);
    };

    let value = props_value(&props);
    if pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }
    Ok(())
}

/// Accept either a plain path or an absolute URL, taking its path part.
fn parse_url_arg(url: &str) -> UrlPath {
    match extract_url_path(url) {
        Some(path) => UrlPath::from_page(&path),
        None => UrlPath::from_browser(url),
    }
}

/// The JSON document `props` and `build` emit per page.
pub fn props_value(props: &ResolvedProps) -> JsonValue {
    json!({
        "page": props.page,
        "site": JsonValue::Object(props.site.clone()),
    })
}
