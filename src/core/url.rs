//! URL path type for type-safe route handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input, encode on output

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Always ends with `/` (page routes only in this crate)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from user/browser input (decode percent-encoding, strip query and fragment).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Create page URL. Normalizes leading/trailing slashes, strips query and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);

        let with_leading = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a path segment: `/blog/` + `page/2` -> `/blog/page/2/`.
    pub fn join_segment(&self, segment: &str) -> Self {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            return self.clone();
        }
        Self::from_page(&format!("{}{}/", self.0, segment))
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if the URL path is the site root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Get parent URL path.
    ///
    /// `/posts/hello/` -> `/posts/`, `/posts/` -> `/`, `/` -> `None`
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rfind('/') {
            Some(0) => Some(Self(Arc::from("/"))),
            Some(idx) => Some(Self(Arc::from(format!("{}/", &trimmed[..idx])))),
            None => Some(Self(Arc::from("/"))),
        }
    }

    /// Compare ignoring trailing slash.
    pub fn matches_ignoring_trailing_slash(&self, other: &str) -> bool {
        let self_trimmed = self.0.trim_end_matches('/');
        let other_trimmed = other.trim_end_matches('/');

        if self_trimmed.is_empty() && other_trimmed.is_empty() {
            return true;
        }
        self_trimmed == other_trimmed
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_page(&s)
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page() {
        let url = UrlPath::from_page("/blog/post-1/");
        assert_eq!(url.as_str(), "/blog/post-1/");
    }

    #[test]
    fn test_from_page_adds_slashes() {
        assert_eq!(UrlPath::from_page("blog/post-1").as_str(), "/blog/post-1/");
        assert_eq!(UrlPath::from_page("/blog").as_str(), "/blog/");
    }

    #[test]
    fn test_from_page_root() {
        assert_eq!(UrlPath::from_page("").as_str(), "/");
        assert_eq!(UrlPath::from_page("/").as_str(), "/");
        assert_eq!(UrlPath::from_page("  ").as_str(), "/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_page("/blog?v=1").as_str(), "/blog/");
        assert_eq!(UrlPath::from_page("/blog#latest").as_str(), "/blog/");
        assert_eq!(UrlPath::from_page("/blog?v=1#latest").as_str(), "/blog/");
    }

    #[test]
    fn test_from_browser_decodes() {
        let url = UrlPath::from_browser("/blog/hello%20world/");
        assert_eq!(url.as_str(), "/blog/hello world/");
    }

    #[test]
    fn test_from_browser_invalid_utf8_preserved() {
        let url = UrlPath::from_browser("/blog/%FF/");
        assert_eq!(url.as_str(), "/blog/%FF/");
    }

    #[test]
    fn test_to_encoded() {
        let url = UrlPath::from_page("/blog/hello world/");
        assert_eq!(url.to_encoded(), "/blog/hello%20world/");
    }

    #[test]
    fn test_join_segment() {
        let base = UrlPath::from_page("/blog/");
        assert_eq!(base.join_segment("page/2").as_str(), "/blog/page/2/");
        assert_eq!(base.join_segment("/page/3/").as_str(), "/blog/page/3/");
        assert_eq!(base.join_segment("").as_str(), "/blog/");
    }

    #[test]
    fn test_join_segment_on_root() {
        let root = UrlPath::from_page("/");
        assert_eq!(root.join_segment("page/2").as_str(), "/page/2/");
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            UrlPath::from_page("/blog/post-1/").parent(),
            Some(UrlPath::from_page("/blog/"))
        );
        assert_eq!(
            UrlPath::from_page("/blog/").parent(),
            Some(UrlPath::from_page("/"))
        );
        assert_eq!(UrlPath::from_page("/").parent(), None);
    }

    #[test]
    fn test_matches_ignoring_trailing_slash() {
        let url = UrlPath::from_page("/blog/post-1/");
        assert!(url.matches_ignoring_trailing_slash("/blog/post-1"));
        assert!(url.matches_ignoring_trailing_slash("/blog/post-1/"));
        assert!(!url.matches_ignoring_trailing_slash("/blog/"));
    }

    #[test]
    fn test_equality_and_hash() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UrlPath::from_page("/blog/"));
        set.insert(UrlPath::from_page("blog")); // normalizes to the same path
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let url = UrlPath::from_page("/blog/post-1/");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""/blog/post-1/""#);

        let parsed: UrlPath = serde_json::from_str(r#""/blog/post-1""#).unwrap();
        assert_eq!(parsed, url);
    }
}
