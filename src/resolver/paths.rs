//! Static path generation: every URL the site publishes.

use crate::content::ContentPool;
use crate::core::UrlPath;
use crate::debug;

use super::{PageTemplate, collect, pagination};

/// Knobs shared by path and props resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Treat drafts as published (preview builds).
    pub include_drafts: bool,
    /// Feed page size when a feed doesn't set `numOfPostsPerPage`.
    pub default_page_size: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_drafts: false,
            default_page_size: 10,
        }
    }
}

/// Generate every static path the pool's pages publish, in page order.
///
/// Feed pages expand into one path per pagination page. Posts under a
/// `/content/` prefix additionally publish a legacy alias with the prefix
/// collapsed, keeping old inbound links alive.
pub fn resolve_static_paths(pool: &ContentPool, opts: &ResolveOptions) -> Vec<UrlPath> {
    let mut paths = Vec::new();
    for page in pool.pages() {
        if page.is_draft && !opts.include_drafts {
            debug!("paths"; "skipping draft page: {}", page.meta.id);
            continue;
        }
        let Some(base) = page.meta.url_path.as_ref() else {
            debug!("paths"; "page without urlPath skipped: {}", page.meta.id);
            continue;
        };
        match page.template() {
            PageTemplate::Post => push_post_paths(&mut paths, base),
            PageTemplate::PostFeed => {
                let posts = collect::non_featured_posts_sorted(pool, opts.include_drafts);
                let page_size = page.page_size(opts.default_page_size);
                paths.extend(pagination::paged_paths(base, posts.len(), page_size));
            }
            PageTemplate::PostFeedCategory => {
                let posts =
                    collect::category_posts_sorted(pool, &page.meta.id, opts.include_drafts);
                let page_size = page.page_size(opts.default_page_size);
                paths.extend(pagination::paged_paths(base, posts.len(), page_size));
            }
            PageTemplate::Other(_) => paths.push(base.clone()),
        }
    }
    paths
}

/// A post's own route, preceded by its legacy alias when the route sits
/// under a `/content/` prefix.
fn push_post_paths(paths: &mut Vec<UrlPath>, base: &UrlPath) {
    let alias = base.as_str().replacen("/content/", "/", 1);
    if alias != base.as_str() {
        paths.push(UrlPath::from_page(&alias));
    }
    paths.push(base.clone());
}
