//! Resolution pipeline: references, pagination, and template dispatch.

pub mod collect;
pub mod pagination;
mod paths;
mod props;
mod reference;
mod template;

pub use pagination::{Pagination, paged_items_for_path, paged_paths, root_page_path};
pub use paths::{ResolveOptions, resolve_static_paths};
pub use props::{ResolvedProps, resolve_static_props};
pub use reference::resolve_references;
pub use template::PageTemplate;
