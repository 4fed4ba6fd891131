//! Page template kinds.

/// Rendering strategy tag parsed from a document's `modelName`.
///
/// The known variants get dedicated path/props resolution; anything else
/// falls through to `Other`, which publishes directly at its own route
/// with no extra resolution. Unknown templates are a forward-compatibility
/// case, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTemplate {
    /// A single post: `author`/`category` references resolved, no pagination.
    Post,
    /// The main feed: non-featured published posts, newest first, paginated.
    PostFeed,
    /// A per-category feed: posts referencing one category id.
    PostFeedCategory,
    /// Any other model: published as-is at its own route.
    Other(String),
}

impl PageTemplate {
    /// Parse from a `modelName` tag.
    pub fn from_model_name(name: &str) -> Self {
        match name {
            "PostLayout" => Self::Post,
            "PostFeedLayout" => Self::PostFeed,
            "PostFeedCategoryLayout" => Self::PostFeedCategory,
            other => Self::Other(other.to_string()),
        }
    }

    /// The `modelName` tag for this template.
    pub fn name(&self) -> &str {
        match self {
            Self::Post => "PostLayout",
            Self::PostFeed => "PostFeedLayout",
            Self::PostFeedCategory => "PostFeedCategoryLayout",
            Self::Other(name) => name,
        }
    }

    /// Check if this template paginates a collection.
    #[inline]
    pub fn is_feed(&self) -> bool {
        matches!(self, Self::PostFeed | Self::PostFeedCategory)
    }
}
