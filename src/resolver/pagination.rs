//! Pagination: paged path generation and per-path item slices.
//!
//! Page 1 lives at the feed's own route; page *n* (n >= 2) appends a
//! `page/<n>` segment. An empty collection still gets its landing page,
//! so a feed with nothing to show renders an empty list instead of 404ing.
//! A page size of zero disables slicing entirely.

use serde::Serialize;

use crate::core::UrlPath;

/// Pagination metadata merged into a feed page's resolved props.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Zero-based index of the current page.
    pub page_index: usize,
    pub num_pages: usize,
    /// Total items across all pages, before slicing.
    pub num_items: usize,
    pub base_url_path: UrlPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_path: Option<UrlPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_path: Option<UrlPath>,
}

/// Total page count: `ceil(item_count / page_size)`, never less than 1.
pub fn num_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        1
    } else {
        item_count.div_ceil(page_size).max(1)
    }
}

/// Route for one page of a feed.
pub fn page_path(base: &UrlPath, page_index: usize) -> UrlPath {
    if page_index == 0 {
        base.clone()
    } else {
        base.join_segment(&format!("page/{}", page_index + 1))
    }
}

/// All routes a feed needs, in page order.
pub fn paged_paths(base: &UrlPath, item_count: usize, page_size: usize) -> Vec<UrlPath> {
    (0..num_pages(item_count, page_size))
        .map(|i| page_path(base, i))
        .collect()
}

/// Zero-based page index encoded in a route's trailing `/page/<n>` segment.
pub fn page_index_for_path(url_path: &str) -> usize {
    let trimmed = url_path.trim_end_matches('/');
    let Some((rest, last)) = trimmed.rsplit_once('/') else {
        return 0;
    };
    if !rest.ends_with("/page") && rest != "page" {
        return 0;
    }
    match last.parse::<usize>() {
        Ok(n) => n.saturating_sub(1),
        Err(_) => 0,
    }
}

/// Strip a trailing `/page/<n>` segment to recover the feed's base route.
pub fn root_page_path(url_path: &str) -> UrlPath {
    let trimmed = url_path.trim_end_matches('/');
    if let Some((rest, last)) = trimmed.rsplit_once('/')
        && !last.is_empty()
        && last.bytes().all(|b| b.is_ascii_digit())
        && let Some(base) = rest.strip_suffix("/page")
    {
        return UrlPath::from_page(if base.is_empty() { "/" } else { base });
    }
    UrlPath::from_page(url_path)
}

/// The items belonging to one page.
pub fn page_slice<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return items;
    }
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Slice and metadata for the page a route points at.
pub fn paged_items_for_path<'a, T>(
    url_path: &str,
    base: &UrlPath,
    items: &'a [T],
    page_size: usize,
) -> (&'a [T], Pagination) {
    let page_index = page_index_for_path(url_path);
    let pages = num_pages(items.len(), page_size);
    let slice = page_slice(items, page_index, page_size);
    let pagination = Pagination {
        page_index,
        num_pages: pages,
        num_items: items.len(),
        base_url_path: base.clone(),
        prev_path: (page_index > 0).then(|| page_path(base, page_index - 1)),
        next_path: (page_index + 1 < pages).then(|| page_path(base, page_index + 1)),
    };
    (slice, pagination)
}
