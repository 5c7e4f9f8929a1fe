//! Dot-delimited path handling
//!
//! A path such as `"a.b.c"` names the chain of nodes `a` → `b` → `c`
//! beneath the root. The empty string names the root itself.
//!
//! There is no escaping, and empty segments are kept literally: `"a..b"`
//! walks `a`, then a child named `""`, then `b`. Only the whole empty
//! string is special.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Split a path into its segments.
///
/// The empty path yields no segments (the root). Every other string yields
/// one segment per separator plus one, empty segments included.
///
/// ```
/// use canopy::path::segments;
///
/// assert_eq!(segments("").count(), 0);
/// assert_eq!(segments("a.b").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(segments("a..b").collect::<Vec<_>>(), vec!["a", "", "b"]);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    // `"".split('.')` would yield one empty segment; the root has none
    let skip_root = is_root(path);
    path.split(SEPARATOR).filter(move |_| !skip_root)
}

/// Join a parent path and a child segment.
///
/// Joining onto the root path yields the segment alone.
pub fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        let mut path = String::with_capacity(parent.len() + 1 + segment.len());
        path.push_str(parent);
        path.push(SEPARATOR);
        path.push_str(segment);
        path
    }
}

/// Check whether a path names the root.
pub fn is_root(path: &str) -> bool {
    path.is_empty()
}
