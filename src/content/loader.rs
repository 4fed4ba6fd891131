//! Content loaders: snapshot files and per-object JSON directories.
//!
//! Two source layouts are supported:
//!
//! - a single snapshot file `{ "site": {..}, "pages": [..], "objects": [..] }`,
//!   the shape a CMS export hands over in one piece,
//! - a directory of `.json` files, one document per file, where an object's
//!   id defaults to its project-relative path (`content/data/alice.json`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::object::{ContentObject, JsonMap};
use crate::debug;

/// Content loading failures, always carrying the offending path.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("content source not found: {0}")]
    NotFound(PathBuf),
}

/// Result of loading a content source.
#[derive(Debug, Default)]
pub struct LoadedContent {
    pub objects: Vec<ContentObject>,
    /// Site data from the snapshot, if the source carried one.
    pub site: Option<JsonMap>,
}

/// Snapshot file shape.
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    site: JsonMap,
    #[serde(default)]
    pages: Vec<ContentObject>,
    #[serde(default)]
    objects: Vec<ContentObject>,
}

/// Load content from `source`: a snapshot `.json` file or a directory of
/// per-object files. `root` anchors the relative paths used as default ids.
pub fn load(source: &Path, root: &Path) -> Result<LoadedContent, ContentError> {
    if source.is_file() {
        load_snapshot(source)
    } else if source.is_dir() {
        Ok(LoadedContent {
            objects: load_dir(source, root)?,
            site: None,
        })
    } else {
        Err(ContentError::NotFound(source.to_path_buf()))
    }
}

/// Load a single snapshot file.
pub fn load_snapshot(path: &Path) -> Result<LoadedContent, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut objects = snapshot.pages;
    objects.extend(snapshot.objects);
    debug!("content"; "snapshot {}: {} objects", path.display(), objects.len());

    Ok(LoadedContent {
        objects,
        site: if snapshot.site.is_empty() {
            None
        } else {
            Some(snapshot.site)
        },
    })
}

/// Load every `.json` document under `dir`, sorted by path for
/// deterministic ids and pool order.
pub fn load_dir(dir: &Path, root: &Path) -> Result<Vec<ContentObject>, ContentError> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();

    let mut objects = Vec::with_capacity(files.len());
    for file in &files {
        objects.push(load_document(file, root)?);
    }
    debug!("content"; "loaded {} documents from {}", objects.len(), dir.display());
    Ok(objects)
}

/// Parse one document file, synthesizing the `__metadata` envelope when the
/// file doesn't carry one.
fn load_document(file: &Path, root: &Path) -> Result<ContentObject, ContentError> {
    let content = fs::read_to_string(file).map_err(|source| ContentError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    let mut value: JsonValue =
        serde_json::from_str(&content).map_err(|source| ContentError::Parse {
            path: file.to_path_buf(),
            source,
        })?;

    if let Some(map) = value.as_object_mut()
        && !map.contains_key("__metadata")
    {
        let envelope = synthesize_metadata(map, file, root);
        map.insert("__metadata".to_string(), envelope);
    }

    serde_json::from_value(value).map_err(|source| ContentError::Parse {
        path: file.to_path_buf(),
        source,
    })
}

/// Default envelope for bare documents: id from the project-relative file
/// path, model from the `type` field, route from `urlPath`.
fn synthesize_metadata(map: &JsonMap, file: &Path, root: &Path) -> JsonValue {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let id = rel.to_string_lossy().replace('\\', "/");

    let model_name = map
        .get("type")
        .and_then(JsonValue::as_str)
        .unwrap_or_default();

    let mut envelope = JsonMap::new();
    envelope.insert("id".to_string(), JsonValue::String(id));
    envelope.insert(
        "modelName".to_string(),
        JsonValue::String(model_name.to_string()),
    );
    if let Some(url_path) = map.get("urlPath").and_then(JsonValue::as_str) {
        envelope.insert(
            "urlPath".to_string(),
            JsonValue::String(url_path.to_string()),
        );
    }
    JsonValue::Object(envelope)
}
