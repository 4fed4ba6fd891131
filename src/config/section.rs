//! Configuration section definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::content::JsonMap;

/// `[site]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSectionConfig {
    #[serde(default)]
    pub info: SiteInfoConfig,
}

/// `[site.info]` — site metadata merged into every page's props when the
/// content source carries no site data of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteInfoConfig {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Canonical site URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Free-form `[site.info.extra]` table, passed through untouched.
    #[serde(default)]
    pub extra: JsonMap,
}

impl SiteInfoConfig {
    /// Flatten into the site data map templates receive.
    pub fn to_site_data(&self) -> JsonMap {
        let mut map = JsonMap::new();
        if !self.title.is_empty() {
            map.insert("title".to_string(), JsonValue::String(self.title.clone()));
        }
        if !self.description.is_empty() {
            map.insert(
                "description".to_string(),
                JsonValue::String(self.description.clone()),
            );
        }
        if let Some(url) = &self.url {
            map.insert("url".to_string(), JsonValue::String(url.clone()));
        }
        map.extend(self.extra.clone());
        map
    }
}

/// `[build]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source: a directory of documents or a single snapshot file.
    pub content: PathBuf,

    /// Output directory for `build`.
    pub output: PathBuf,

    /// Feed page size when a feed doesn't set `numOfPostsPerPage`.
    pub page_size: usize,

    /// Include drafts (preview builds).
    pub preview: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            output: PathBuf::from("public"),
            page_size: 10,
            preview: false,
        }
    }
}
