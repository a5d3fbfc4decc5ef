//! Glob-based document selection.
//!
//! The binder only attaches linkers to documents whose path matches a glob
//! pattern. Patterns follow the usual conventions: `*` never crosses a `/`,
//! `**` spans any number of directories, and by default paths with a segment
//! starting with `.` are left alone.

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{Error, Result};
use crate::path::normalize::basename;

/// Pattern that selects every (non-dot) document.
pub const DEFAULT_PATTERN: &str = "**/*";

/// Options controlling how a [`PathMatcher`] compares paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Let wildcards match segments that start with `.`.
    pub dot: bool,
    /// Compare case-insensitively.
    pub nocase: bool,
    /// Match patterns without a `/` against the final path segment only.
    pub match_base: bool,
}

/// A compiled predicate over document paths.
///
/// # Examples
///
/// ```
/// use relink::{MatchOptions, PathMatcher};
///
/// let matcher = PathMatcher::new("**/*.md", MatchOptions::default()).unwrap();
/// assert!(matcher.is_match("x.md"));
/// assert!(matcher.is_match("blog/post.md"));
/// assert!(!matcher.is_match("x.gif"));
/// assert!(!matcher.is_match(".git/test.md"));
///
/// let dotted = PathMatcher::new("**/*.md", MatchOptions { dot: true, ..Default::default() }).unwrap();
/// assert!(dotted.is_match(".git/test.md"));
/// ```
#[derive(Debug, Clone)]
pub struct PathMatcher {
    pattern: String,
    matcher: GlobMatcher,
    options: MatchOptions,
    names_dot_segment: bool,
    has_separator: bool,
}

impl PathMatcher {
    /// Compile `pattern` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the glob cannot be compiled.
    pub fn new(pattern: &str, options: MatchOptions) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .case_insensitive(options.nocase)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
            options,
            names_dot_segment: pattern.split('/').any(|segment| segment.starts_with('.')),
            has_separator: pattern.contains('/'),
        })
    }

    /// The source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The options the pattern was compiled with.
    #[must_use]
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Returns true if `path` is selected.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        let candidate = if self.options.match_base && !self.has_separator {
            basename(path)
        } else {
            path
        };

        if !self.options.dot && !self.names_dot_segment && has_dot_segment(candidate) {
            return false;
        }

        self.matcher.is_match(candidate)
    }
}

fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment.starts_with('.'))
}
