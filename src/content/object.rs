//! Content objects: the atomic unit loaded from the content store.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::core::UrlPath;
use crate::resolver::PageTemplate;
use crate::utils::date::DateTimeUtc;

/// A JSON object map for storing arbitrary schema-defined fields.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Identity envelope carried by every document under the `__metadata` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectMeta {
    /// Unique id within the pool. File-backed stores use the relative
    /// file path (e.g. `content/data/alice.json`).
    pub id: String,
    /// Schema tag identifying the document's model.
    #[serde(rename = "modelName", default)]
    pub model_name: String,
    /// Route for page-like objects. Absent for data objects (authors,
    /// categories).
    #[serde(rename = "urlPath", default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<UrlPath>,
}

impl ObjectMeta {
    pub fn new(id: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model_name: model_name.into(),
            url_path: None,
        }
    }

    pub fn with_url_path(mut self, url_path: impl Into<UrlPath>) -> Self {
        self.url_path = Some(url_path.into());
        self
    }
}

/// A document from the content store
///
/// The identity envelope and the fields the resolver inspects are typed;
/// everything else the schema defines stays in `fields` as raw JSON
/// (serde flatten), round-tripping untouched into resolved props.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentObject {
    #[serde(rename = "__metadata")]
    pub meta: ObjectMeta,
    /// Draft documents are excluded from generated paths unless previewing.
    #[serde(rename = "isDraft", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_draft: bool,
    /// Featured posts are excluded from the main feed collection.
    #[serde(rename = "isFeatured", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_featured: bool,
    /// Publish date, `YYYY-MM-DD` or RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Remaining schema-defined fields (raw JSON, order preserved).
    #[serde(flatten, default)]
    pub fields: JsonMap,
}

impl ContentObject {
    pub fn new(meta: ObjectMeta) -> Self {
        Self {
            meta,
            is_draft: false,
            is_featured: false,
            date: None,
            fields: JsonMap::new(),
        }
    }

    /// Rendering strategy tag for this document.
    pub fn template(&self) -> PageTemplate {
        PageTemplate::from_model_name(&self.meta.model_name)
    }

    /// Parsed publish date, `None` when absent or malformed.
    pub fn parsed_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse)
    }

    /// Get a schema field by name.
    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name)
    }

    /// Per-feed page size, falling back to the supplied default.
    pub fn page_size(&self, default: usize) -> usize {
        self.field("numOfPostsPerPage")
            .and_then(JsonValue::as_u64)
            .map_or(default, |n| n as usize)
    }

    /// Serialize into a JSON value for reference resolution.
    pub fn to_value(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}
