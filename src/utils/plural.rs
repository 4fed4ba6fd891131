//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 paths)
/// - `plural_s(1)` -> `""` (1 path)
/// - `plural_s(5)` -> `"s"` (5 paths)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "path")` -> `"0 paths"`
/// - `plural_count(1, "path")` -> `"1 path"`
/// - `plural_count(5, "path")` -> `"5 paths"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
