//! Reference resolution: swap pointer values for full documents.
//!
//! A reference is either a bare id string (`"content/data/alice.json"`) or
//! an `{ "id": "..." }` object. Resolution is tolerant: a reference whose
//! target is missing from the pool becomes `null`, never an error, so a
//! broken content link can't take down a whole build. Callers filter
//! afterwards if they care.

use serde_json::Value as JsonValue;

use crate::content::ContentPool;
use crate::debug;

/// Resolve the given dotted field paths on a deep clone of `value`.
///
/// Paths apply independently; within one path, parent segments are
/// resolved before children, so `posts.author` first materializes the
/// `posts` references, then the `author` reference inside each post.
/// Arrays are resolved element-wise at every level.
///
/// Idempotent: values that already hold a resolved document (recognized
/// by its `__metadata` envelope) pass through untouched.
pub fn resolve_references(value: &JsonValue, paths: &[&str], pool: &ContentPool) -> JsonValue {
    let mut out = value.clone();
    for path in paths {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        if !segments.is_empty() {
            resolve_at(&mut out, &segments, pool);
        }
    }
    out
}

/// Walk one dotted path, substituting references along the way.
fn resolve_at(value: &mut JsonValue, segments: &[&str], pool: &ContentPool) {
    match value {
        JsonValue::Array(items) => {
            for item in items {
                resolve_at(item, segments, pool);
            }
        }
        JsonValue::Object(map) => {
            let Some((head, rest)) = segments.split_first() else {
                return;
            };
            if let Some(field) = map.get_mut(*head) {
                substitute(field, pool);
                if !rest.is_empty() {
                    resolve_at(field, rest, pool);
                }
            }
        }
        _ => {}
    }
}

/// Replace a reference value (or array of them) with the pooled document.
fn substitute(field: &mut JsonValue, pool: &ContentPool) {
    match field {
        JsonValue::String(id) => {
            *field = lookup(id, pool);
        }
        JsonValue::Object(map) => {
            // A `__metadata` envelope means this is already resolved.
            if map.contains_key("__metadata") {
                return;
            }
            if let Some(id) = map.get("id").and_then(JsonValue::as_str) {
                let id = id.to_string();
                *field = lookup(&id, pool);
            }
        }
        JsonValue::Array(items) => {
            for item in items {
                substitute(item, pool);
            }
        }
        _ => {}
    }
}

fn lookup(id: &str, pool: &ContentPool) -> JsonValue {
    pool.get_value(id).unwrap_or_else(|| {
        debug!("resolve"; "unresolved reference: {}", id);
        JsonValue::Null
    })
}
