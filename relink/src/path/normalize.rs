//! Path normalization functions.
//!
//! All paths handled here are logical, slash-separated strings anchored at a
//! virtual site root. Nothing in this module touches the filesystem.
//!
//! Normalization:
//! - Joins segments the way POSIX `resolve()` does (a later absolute segment
//!   restarts the path)
//! - Resolves `.` and `..` components
//! - Clamps `..` at the virtual root instead of escaping above it
//! - Collapses repeated separators and drops trailing separators

/// Path separator for logical site paths.
pub const SEPARATOR: char = '/';

/// Resolve `.` and `..` components in a slash-separated path.
///
/// The result is always absolute (starts with `/`), never has a trailing
/// separator unless it is the root itself, and never contains `.` or `..`
/// segments. A `..` at the root is dropped, so paths cannot escape it.
///
/// # Examples
///
/// ```
/// use relink::path::normalize::resolve_components;
///
/// assert_eq!(resolve_components("/a/./b/../c"), "/a/c");
/// assert_eq!(resolve_components("a//b/"), "/a/b");
/// assert_eq!(resolve_components("/a/../../.."), "/");
/// ```
#[must_use]
pub fn resolve_components(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                // Clamp at the virtual root
                segments.pop();
            }
            normal => segments.push(normal),
        }
    }

    let mut result = String::with_capacity(path.len() + 1);
    result.push(SEPARATOR);
    result.push_str(&segments.join("/"));
    result
}

/// Join path segments from left to right and normalize the result.
///
/// Mirrors POSIX `resolve()` anchored at the virtual root: empty segments are
/// ignored, and a segment starting with `/` discards everything before it.
///
/// # Examples
///
/// ```
/// use relink::path::normalize::resolve_posix;
///
/// assert_eq!(resolve_posix(&["/", "a/test/file.html", "..", "../xyz"]), "/a/xyz");
/// assert_eq!(resolve_posix(&["/", "a", "/b"]), "/b");
/// assert_eq!(resolve_posix(&["/", "", ".."]), "/");
/// ```
#[must_use]
pub fn resolve_posix(segments: &[&str]) -> String {
    let start = segments
        .iter()
        .rposition(|s| s.starts_with(SEPARATOR))
        .unwrap_or(0);

    let joined = segments[start..]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    resolve_components(&joined)
}

/// Directory containing `path`, as an absolute normalized path.
///
/// Equivalent to `resolve_posix(&["/", path, ".."])`.
///
/// # Examples
///
/// ```
/// use relink::path::normalize::dirname;
///
/// assert_eq!(dirname("a/test/file.html"), "/a/test");
/// assert_eq!(dirname("index.html"), "/");
/// assert_eq!(dirname(""), "/");
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    resolve_posix(&["/", path, ".."])
}

/// Final segment of `path`, ignoring trailing separators.
///
/// # Examples
///
/// ```
/// use relink::path::normalize::basename;
///
/// assert_eq!(basename("a/test/file.html"), "file.html");
/// assert_eq!(basename("file.html"), "file.html");
/// assert_eq!(basename("a/b/"), "b");
/// assert_eq!(basename(""), "");
/// ```
#[must_use]
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    trimmed.rsplit(SEPARATOR).next().unwrap_or("")
}

/// Returns true if `path` names a directory (ends with a separator).
#[must_use]
pub fn is_directory(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Remove a single leading separator, turning an absolute path root-relative.
///
/// # Examples
///
/// ```
/// use relink::path::normalize::strip_root;
///
/// assert_eq!(strip_root("/a/b"), "a/b");
/// assert_eq!(strip_root("/"), "");
/// assert_eq!(strip_root("a"), "a");
/// ```
#[must_use]
pub fn strip_root(path: &str) -> &str {
    path.strip_prefix(SEPARATOR).unwrap_or(path)
}
