//! Shortest relative path between two directories.
//!
//! This follows POSIX `relative()` semantics: both arguments are normalized
//! against the virtual root, shared leading segments are dropped, one `..` is
//! emitted per remaining segment of `from`, and the remaining segments of
//! `to` are appended. The result never has a trailing separator, and is empty
//! when both paths name the same directory.

use crate::path::normalize::resolve_posix;

/// Compute the relative path from directory `from` to directory `to`.
///
/// # Examples
///
/// ```
/// use relink::path::relative::relative;
///
/// assert_eq!(relative("/a", "/a/test"), "test");
/// assert_eq!(relative("/a/xyz/", "/a/test"), "../test");
/// assert_eq!(relative("/a/test/x", "/a/test/y"), "../y");
/// assert_eq!(relative("/a/b", "/a/b"), "");
/// ```
#[must_use]
pub fn relative(from: &str, to: &str) -> String {
    let from = resolve_posix(&["/", from]);
    let to = resolve_posix(&["/", to]);

    if from == to {
        return String::new();
    }

    let from_segments = segments(&from);
    let to_segments = segments(&to);

    let shared = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::with_capacity(from_segments.len() + to_segments.len());
    parts.extend(std::iter::repeat("..").take(from_segments.len() - shared));
    parts.extend(&to_segments[shared..]);

    parts.join("/")
}

/// Split a normalized absolute path into its non-empty segments.
fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_directory_is_empty() {
        assert_eq!(relative("/", "/"), "");
        assert_eq!(relative("/a/b/", "/a/b"), "");
    }

    #[test]
    fn test_descend() {
        assert_eq!(relative("/", "/a/b"), "a/b");
        assert_eq!(relative("/a", "/a/b/c"), "b/c");
    }

    #[test]
    fn test_ascend() {
        assert_eq!(relative("/a/b/c", "/a"), "../..");
        assert_eq!(relative("/a/b", "/"), "../..");
    }

    #[test]
    fn test_sibling() {
        assert_eq!(relative("/a/x", "/a/y"), "../y");
    }

    #[test]
    fn test_unrelated() {
        assert_eq!(relative("/a/b", "/c/d"), "../../c/d");
    }

    #[test]
    fn test_segment_prefix_is_not_shared() {
        // "/ab" is not inside "/a"
        assert_eq!(relative("/a", "/ab"), "../ab");
    }

    #[test]
    fn test_inputs_are_normalized() {
        assert_eq!(relative("/a/./b/..", "/a/c/"), "c");
        assert_eq!(relative("x/../y", "/y/z"), "z");
    }

    #[test]
    fn test_no_trailing_separator() {
        assert!(!relative("/", "/dir/").ends_with('/'));
    }

    mod property_tests {
        use super::*;
        use crate::path::normalize::resolve_components;
        use proptest::prelude::*;

        fn dir_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-c]{1,2}", 0..5)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// relative(A, A) is always empty
            #[test]
            fn relative_reflexive(dir in dir_strategy()) {
                prop_assert_eq!(relative(&dir, &dir), "");
            }

            /// Applying the relative path to `from` lands on `to`
            #[test]
            fn relative_round_trips(from in dir_strategy(), to in dir_strategy()) {
                let rel = relative(&from, &to);
                let landed = resolve_posix(&["/", &from, &rel]);
                prop_assert_eq!(landed, resolve_components(&to));
            }
        }
    }
}
