//! Content model: documents, the immutable pool, and loaders.

mod loader;
mod object;
mod pool;

pub use loader::{ContentError, LoadedContent, load, load_dir, load_snapshot};
pub use object::{ContentObject, JsonMap, ObjectMeta};
pub use pool::ContentPool;
