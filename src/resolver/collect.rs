//! Collection queries over the pool: the post lists feeds and sections draw
//! from, with the shared publish filter and sort order.

use std::cmp::Ordering;

use serde_json::Value as JsonValue;

use crate::content::{ContentObject, ContentPool};
use crate::resolver::PageTemplate;

/// Draft visibility: drafts count as published only when previewing.
pub fn is_published(obj: &ContentObject, include_drafts: bool) -> bool {
    include_drafts || !obj.is_draft
}

/// All published posts, newest first.
pub fn posts_sorted(pool: &ContentPool, include_drafts: bool) -> Vec<&ContentObject> {
    let mut posts: Vec<&ContentObject> = pool
        .objects()
        .iter()
        .filter(|o| o.template() == PageTemplate::Post && is_published(o, include_drafts))
        .collect();
    sort_newest_first(&mut posts);
    posts
}

/// The main feed collection: published posts minus featured ones.
pub fn non_featured_posts_sorted(pool: &ContentPool, include_drafts: bool) -> Vec<&ContentObject> {
    let mut posts = posts_sorted(pool, include_drafts);
    posts.retain(|p| !p.is_featured);
    posts
}

/// Published posts referencing the given category, newest first.
pub fn category_posts_sorted<'a>(
    pool: &'a ContentPool,
    category_id: &str,
    include_drafts: bool,
) -> Vec<&'a ContentObject> {
    let mut posts = posts_sorted(pool, include_drafts);
    posts.retain(|p| references_category(p, category_id));
    posts
}

/// Check whether a post's `category` field points at the given id. The
/// field may be a bare id string, an `{ "id": .. }` object, an already
/// resolved document, or an array of any of those.
pub fn references_category(post: &ContentObject, category_id: &str) -> bool {
    post.field("category")
        .is_some_and(|v| value_refs_id(v, category_id))
}

fn value_refs_id(value: &JsonValue, id: &str) -> bool {
    match value {
        JsonValue::String(s) => s == id,
        JsonValue::Object(map) => {
            map.get("id").and_then(JsonValue::as_str) == Some(id)
                || map
                    .get("__metadata")
                    .and_then(|m| m.get("id"))
                    .and_then(JsonValue::as_str)
                    == Some(id)
        }
        JsonValue::Array(items) => items.iter().any(|v| value_refs_id(v, id)),
        _ => false,
    }
}

/// Newest first; undated posts sink to the end; ties break on id so the
/// order is stable across runs.
fn sort_newest_first(posts: &mut [&ContentObject]) {
    posts.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.meta.id.cmp(&b.meta.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.meta.id.cmp(&b.meta.id),
    });
}
