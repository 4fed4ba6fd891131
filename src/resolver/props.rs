//! Static props resolution: the full data a template needs to render one
//! path, with references resolved and feed pages sliced.

use serde_json::Value as JsonValue;

use crate::content::{ContentObject, ContentPool, JsonMap};
use crate::core::UrlPath;
use crate::debug;

use super::paths::ResolveOptions;
use super::reference::resolve_references;
use super::{PageTemplate, collect, pagination};

/// Everything a template renders from: the page's resolved data plus
/// site-wide data.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProps {
    pub page: JsonValue,
    pub site: JsonMap,
}

/// Resolve the props for one generated path.
///
/// The owning page is found by stripping any `/page/<n>` suffix, so every
/// pagination page of a feed resolves against the same document. Returns
/// `None` when no page owns the path, or when the page is an unpublished
/// draft.
pub fn resolve_static_props(
    url_path: &UrlPath,
    pool: &ContentPool,
    opts: &ResolveOptions,
) -> Option<ResolvedProps> {
    let base = pagination::root_page_path(url_path.as_str());
    let page = pool
        .page_for_path(&base)
        .or_else(|| legacy_alias_page(pool, &base))?;
    if page.is_draft && !opts.include_drafts {
        debug!("props"; "draft page not published: {}", page.meta.id);
        return None;
    }

    let mut value = match page.template() {
        PageTemplate::Post => {
            resolve_references(&page.to_value(), &["author", "category"], pool)
        }
        PageTemplate::PostFeed => {
            let posts = collect::non_featured_posts_sorted(pool, opts.include_drafts);
            feed_value(page, url_path, &base, &posts, pool, opts)
        }
        PageTemplate::PostFeedCategory => {
            let posts = collect::category_posts_sorted(pool, &page.meta.id, opts.include_drafts);
            feed_value(page, url_path, &base, &posts, pool, opts)
        }
        PageTemplate::Other(_) => page.to_value(),
    };
    resolve_sections(&mut value, pool, opts);

    Some(ResolvedProps {
        page: value,
        site: pool.site.clone(),
    })
}

/// Posts under a `/content/` prefix also publish an alias with the prefix
/// collapsed; resolve that alias back to its owning post.
fn legacy_alias_page<'a>(pool: &'a ContentPool, path: &UrlPath) -> Option<&'a ContentObject> {
    pool.pages().find(|p| {
        p.template() == PageTemplate::Post
            && p.meta.url_path.as_ref().is_some_and(|u| {
                let alias = u.as_str().replacen("/content/", "/", 1);
                alias != u.as_str() && UrlPath::from_page(&alias) == *path
            })
    })
}

/// A feed page's value: the page document plus the slice of resolved items
/// for this exact path and the pagination metadata, all in one flat map.
fn feed_value(
    page: &ContentObject,
    requested: &UrlPath,
    base: &UrlPath,
    posts: &[&ContentObject],
    pool: &ContentPool,
    opts: &ResolveOptions,
) -> JsonValue {
    let page_size = page.page_size(opts.default_page_size);
    let (slice, pagination) =
        pagination::paged_items_for_path(requested.as_str(), base, posts, page_size);

    let items: Vec<JsonValue> = slice
        .iter()
        .map(|p| resolve_references(&p.to_value(), &["author", "category"], pool))
        .collect();

    let mut map = match page.to_value() {
        JsonValue::Object(map) => map,
        _ => JsonMap::new(),
    };
    if let Ok(JsonValue::Object(meta)) = serde_json::to_value(&pagination) {
        map.extend(meta);
    }
    map.insert("items".to_string(), JsonValue::Array(items));
    JsonValue::Object(map)
}

/// Walk the resolved page value and give nested sections their data.
///
/// A section is any nested object carrying a model tag, either a
/// `__metadata.modelName` envelope or a bare `type` field. Models without
/// a dedicated resolver pass through untouched.
fn resolve_sections(value: &mut JsonValue, pool: &ContentPool, opts: &ResolveOptions) {
    match value {
        JsonValue::Array(items) => {
            for item in items {
                resolve_sections(item, pool, opts);
            }
        }
        JsonValue::Object(map) => {
            if let Some(model) = section_model(map) {
                resolve_section(map, &model, pool, opts);
            }
            for nested in map.values_mut() {
                resolve_sections(nested, pool, opts);
            }
        }
        _ => {}
    }
}

fn section_model(map: &JsonMap) -> Option<String> {
    map.get("__metadata")
        .and_then(|m| m.get("modelName"))
        .and_then(JsonValue::as_str)
        .or_else(|| map.get("type").and_then(JsonValue::as_str))
        .map(str::to_string)
}

fn resolve_section(map: &mut JsonMap, model: &str, pool: &ContentPool, opts: &ResolveOptions) {
    match model {
        "RecentPostsSection" => {
            let count = map
                .get("recentCount")
                .and_then(JsonValue::as_u64)
                .map_or(6, |n| n as usize);
            let posts: Vec<JsonValue> = collect::posts_sorted(pool, opts.include_drafts)
                .into_iter()
                .take(count)
                .map(|p| resolve_references(&p.to_value(), &["author", "category"], pool))
                .collect();
            map.insert("posts".to_string(), JsonValue::Array(posts));
        }
        "FeaturedPostsSection" => {
            resolve_section_refs(map, &["posts.author", "posts.category"], pool);
        }
        "FeaturedPeopleSection" => {
            resolve_section_refs(map, &["people"], pool);
        }
        _ => {}
    }
}

fn resolve_section_refs(map: &mut JsonMap, paths: &[&str], pool: &ContentPool) {
    let resolved = resolve_references(&JsonValue::Object(map.clone()), paths, pool);
    if let JsonValue::Object(resolved) = resolved {
        *map = resolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ObjectMeta;
    use serde_json::json;

    fn obj(id: &str, model: &str) -> ContentObject {
        ContentObject::new(ObjectMeta::new(id, model))
    }

    fn page(id: &str, model: &str, url: &str) -> ContentObject {
        ContentObject::new(ObjectMeta::new(id, model).with_url_path(url))
    }

    fn post(id: &str, url: &str, date: &str) -> ContentObject {
        let mut obj = page(id, "PostLayout", url);
        obj.date = Some(date.into());
        obj
    }

    fn person(id: &str, name: &str) -> ContentObject {
        let mut obj = obj(id, "Person");
        obj.fields.insert("name".into(), json!(name));
        obj
    }

    fn site() -> JsonMap {
        let mut site = JsonMap::new();
        site.insert("title".into(), json!("The Crypto Frontier"));
        site
    }

    fn resolve(pool: &ContentPool, url: &str) -> Option<ResolvedProps> {
        resolve_static_props(
            &UrlPath::from_page(url),
            pool,
            &ResolveOptions::default(),
        )
    }

    #[test]
    fn test_post_props_resolve_author_and_category() {
        let mut post = post("p1", "/blog/p1", "2024-01-01");
        post.fields.insert("author".into(), json!("alice"));
        post.fields.insert("category".into(), json!("cat-1"));
        let mut category = obj("cat-1", "Category");
        category.fields.insert("title".into(), json!("Rust"));

        let pool = ContentPool::new(vec![post, person("alice", "Alice"), category], site());
        let props = resolve(&pool, "/blog/p1/").unwrap();
        assert_eq!(props.page["author"]["name"], "Alice");
        assert_eq!(props.page["category"]["title"], "Rust");
        assert_eq!(props.site.get("title").unwrap(), "The Crypto Frontier");
    }

    #[test]
    fn test_legacy_alias_resolves_to_the_same_post() {
        let mut post = post("p1", "/content/blog/p1", "2024-01-01");
        post.fields.insert("title".into(), json!("Hello"));
        let pool = ContentPool::new(vec![post], JsonMap::new());

        let own = resolve(&pool, "/content/blog/p1/").unwrap();
        let alias = resolve(&pool, "/blog/p1/").unwrap();
        assert_eq!(own.page["title"], "Hello");
        assert_eq!(own.page, alias.page);
    }

    #[test]
    fn test_unknown_path_is_none() {
        let pool = ContentPool::new(vec![], JsonMap::new());
        assert!(resolve(&pool, "/nowhere/").is_none());
    }

    #[test]
    fn test_draft_page_hidden_unless_previewing() {
        let mut draft = post("d", "/blog/d", "2024-01-01");
        draft.is_draft = true;
        let pool = ContentPool::new(vec![draft], JsonMap::new());

        assert!(resolve(&pool, "/blog/d/").is_none());

        let opts = ResolveOptions {
            include_drafts: true,
            ..Default::default()
        };
        assert!(resolve_static_props(&UrlPath::from_page("/blog/d/"), &pool, &opts).is_some());
    }

    fn feed_pool(post_count: usize) -> ContentPool {
        let mut objects = vec![page("feed", "PostFeedLayout", "/blog")];
        for i in 0..post_count {
            let mut p = post(
                &format!("p{i:02}"),
                &format!("/blog/p{i:02}"),
                &format!("2024-01-{:02}", i + 1),
            );
            p.fields.insert("author".into(), json!("alice"));
            objects.push(p);
        }
        objects.push(person("alice", "Alice"));
        ContentPool::new(objects, site())
    }

    #[test]
    fn test_feed_first_page_slice_and_metadata() {
        let pool = feed_pool(25);
        let props = resolve(&pool, "/blog/").unwrap();

        let items = props.page["items"].as_array().unwrap();
        assert_eq!(items.len(), 10);
        // newest first
        assert_eq!(items[0]["__metadata"]["id"], "p24");
        assert_eq!(items[0]["author"]["name"], "Alice");

        assert_eq!(props.page["pageIndex"], 0);
        assert_eq!(props.page["numPages"], 3);
        assert_eq!(props.page["numItems"], 25);
        assert_eq!(props.page["nextPath"], "/blog/page/2/");
        assert!(props.page.get("prevPath").is_none());
    }

    #[test]
    fn test_feed_last_page_has_the_remainder() {
        let pool = feed_pool(25);
        let props = resolve(&pool, "/blog/page/3/").unwrap();

        assert_eq!(props.page["items"].as_array().unwrap().len(), 5);
        assert_eq!(props.page["pageIndex"], 2);
        assert_eq!(props.page["prevPath"], "/blog/page/2/");
        assert!(props.page.get("nextPath").is_none());
        // pagination pages resolve against the same feed document
        assert_eq!(props.page["__metadata"]["id"], "feed");
    }

    #[test]
    fn test_empty_feed_renders_one_empty_page() {
        let pool = feed_pool(0);
        let props = resolve(&pool, "/blog/").unwrap();
        assert_eq!(props.page["items"].as_array().unwrap().len(), 0);
        assert_eq!(props.page["numPages"], 1);
    }

    #[test]
    fn test_category_feed_slices_only_its_posts() {
        let mut feed = page("cat-rust", "PostFeedCategoryLayout", "/blog/rust");
        feed.fields.insert("title".into(), json!("Rust posts"));
        let mut tagged = post("a", "/blog/a", "2024-01-02");
        tagged.fields.insert("category".into(), json!("cat-rust"));
        let mut other = post("b", "/blog/b", "2024-01-01");
        other.fields.insert("category".into(), json!("cat-go"));

        let pool = ContentPool::new(vec![feed, tagged, other], JsonMap::new());
        let props = resolve(&pool, "/blog/rust/").unwrap();
        let items = props.page["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["__metadata"]["id"], "a");
    }

    #[test]
    fn test_unknown_template_passes_fields_through() {
        let mut about = page("about", "PageLayout", "/about");
        about.fields.insert("title".into(), json!("About us"));
        let pool = ContentPool::new(vec![about], site());

        let props = resolve(&pool, "/about/").unwrap();
        assert_eq!(props.page["title"], "About us");
        assert!(props.page.get("items").is_none());
    }

    #[test]
    fn test_recent_posts_section_gets_latest_posts() {
        let mut home = page("home", "PageLayout", "/");
        home.fields.insert(
            "sections".into(),
            json!([{ "type": "RecentPostsSection", "recentCount": 2 }]),
        );
        let mut objects = vec![home];
        for i in 0..4 {
            objects.push(post(
                &format!("p{i}"),
                &format!("/blog/p{i}"),
                &format!("2024-01-0{}", i + 1),
            ));
        }
        let pool = ContentPool::new(objects, JsonMap::new());

        let props = resolve(&pool, "/").unwrap();
        let posts = props.page["sections"][0]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["__metadata"]["id"], "p3");
        assert_eq!(posts[1]["__metadata"]["id"], "p2");
    }

    #[test]
    fn test_recent_posts_section_defaults_to_six() {
        let mut home = page("home", "PageLayout", "/");
        home.fields
            .insert("sections".into(), json!([{ "type": "RecentPostsSection" }]));
        let mut objects = vec![home];
        for i in 0..8 {
            objects.push(post(
                &format!("p{i}"),
                &format!("/blog/p{i}"),
                &format!("2024-01-0{}", i + 1),
            ));
        }
        let pool = ContentPool::new(objects, JsonMap::new());

        let props = resolve(&pool, "/").unwrap();
        assert_eq!(props.page["sections"][0]["posts"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_featured_posts_section_resolves_nested_refs() {
        let mut home = page("home", "PageLayout", "/");
        home.fields.insert(
            "sections".into(),
            json!([{ "type": "FeaturedPostsSection", "posts": ["p1"] }]),
        );
        let mut featured = post("p1", "/blog/p1", "2024-01-01");
        featured.fields.insert("author".into(), json!("alice"));

        let pool = ContentPool::new(vec![home, featured, person("alice", "Alice")], JsonMap::new());
        let props = resolve(&pool, "/").unwrap();
        let section = &props.page["sections"][0];
        assert_eq!(section["posts"][0]["__metadata"]["id"], "p1");
        assert_eq!(section["posts"][0]["author"]["name"], "Alice");
    }

    #[test]
    fn test_featured_people_section_resolves_people() {
        let mut team = page("team", "PageLayout", "/team");
        team.fields.insert(
            "sections".into(),
            json!([{ "type": "FeaturedPeopleSection", "people": ["alice", "bob"] }]),
        );
        let pool = ContentPool::new(
            vec![team, person("alice", "Alice"), person("bob", "Bob")],
            JsonMap::new(),
        );

        let props = resolve(&pool, "/team/").unwrap();
        let people = props.page["sections"][0]["people"].as_array().unwrap();
        assert_eq!(people[0]["name"], "Alice");
        assert_eq!(people[1]["name"], "Bob");
    }

    #[test]
    fn test_unknown_section_is_untouched() {
        let mut home = page("home", "PageLayout", "/");
        home.fields.insert(
            "sections".into(),
            json!([{ "type": "HeroSection", "heading": "Welcome" }]),
        );
        let pool = ContentPool::new(vec![home], JsonMap::new());

        let props = resolve(&pool, "/").unwrap();
        assert_eq!(
            props.page["sections"][0],
            json!({ "type": "HeroSection", "heading": "Welcome" })
        );
    }

    #[test]
    fn test_sections_resolve_inside_feed_pages_too() {
        let mut feed = page("feed", "PostFeedLayout", "/blog");
        feed.fields.insert(
            "topSections".into(),
            json!([{ "type": "FeaturedPeopleSection", "people": ["alice"] }]),
        );
        let pool = ContentPool::new(vec![feed, person("alice", "Alice")], JsonMap::new());

        let props = resolve(&pool, "/blog/").unwrap();
        assert_eq!(
            props.page["topSections"][0]["people"][0]["name"],
            "Alice"
        );
    }
}
