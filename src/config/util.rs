//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the path component from an absolute URL string.
///
/// Uses the `url` crate for proper parsing, so port numbers, auth info,
/// query strings and fragments are all handled. Returns `None` when the
/// input doesn't parse as an absolute URL, which lets callers fall back
/// to treating it as a plain path.
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.com/blog/page/2/") -> Some("/blog/page/2/")
/// extract_url_path("https://example.com")              -> Some("/")
/// extract_url_path("/blog/")                           -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().to_string())
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}
