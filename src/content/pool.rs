//! The content pool: an immutable snapshot of every document.

use rustc_hash::FxHashMap;
use serde_json::Value as JsonValue;

use super::object::{ContentObject, JsonMap};
use crate::core::UrlPath;
use crate::debug;

/// Flat pool of all content objects for one resolution pass
///
/// Loaded once per run and never mutated afterwards. Pages are the
/// objects carrying a `urlPath`; everything participates in reference
/// lookup through the id index.
#[derive(Debug, Default)]
pub struct ContentPool {
    objects: Vec<ContentObject>,
    by_id: FxHashMap<String, usize>,
    /// Site-wide data merged into every page's resolved props.
    pub site: JsonMap,
}

impl ContentPool {
    /// Build a pool from a flat object list. On duplicate ids the first
    /// occurrence wins.
    pub fn new(objects: Vec<ContentObject>, site: JsonMap) -> Self {
        let mut by_id = FxHashMap::default();
        by_id.reserve(objects.len());
        for (idx, obj) in objects.iter().enumerate() {
            if by_id.contains_key(&obj.meta.id) {
                debug!("pool"; "duplicate object id ignored: {}", obj.meta.id);
                continue;
            }
            by_id.insert(obj.meta.id.clone(), idx);
        }
        Self {
            objects,
            by_id,
            site,
        }
    }

    /// Build a pool from separate page and object lists, the shape a CMS
    /// export hands over. Duplicates between the two are merged by id.
    pub fn from_parts(
        pages: Vec<ContentObject>,
        objects: Vec<ContentObject>,
        site: JsonMap,
    ) -> Self {
        let mut all = pages;
        all.extend(objects);
        Self::new(all, site)
    }

    /// Look up an object by id.
    pub fn get(&self, id: &str) -> Option<&ContentObject> {
        self.by_id.get(id).map(|&idx| &self.objects[idx])
    }

    /// Look up an object as a JSON value, for reference substitution.
    pub fn get_value(&self, id: &str) -> Option<JsonValue> {
        self.get(id).map(ContentObject::to_value)
    }

    /// All objects in load order.
    pub fn objects(&self) -> &[ContentObject] {
        &self.objects
    }

    /// Page-like objects: those carrying a `urlPath`.
    pub fn pages(&self) -> impl Iterator<Item = &ContentObject> {
        self.objects.iter().filter(|o| o.meta.url_path.is_some())
    }

    /// Find the page whose route equals `path`.
    pub fn page_for_path(&self, path: &UrlPath) -> Option<&ContentObject> {
        self.pages()
            .find(|p| p.meta.url_path.as_ref() == Some(path))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
