//! Core types for path resolution.
//!
//! This module defines [`Resolvable`], the closed set of inputs the resolver
//! understands.

use std::fmt;
use std::sync::Arc;

/// Anything that can be resolved to a canonical site path.
///
/// Strings are classified when converted:
/// - `""` becomes [`Resolvable::Empty`] (the site root)
/// - a string starting with `/` becomes [`Resolvable::Absolute`]
/// - anything else becomes [`Resolvable::Relative`]
///
/// Document handles become [`Resolvable::Handle`] and are matched by identity
/// against the document set.
///
/// # Examples
///
/// ```
/// use relink::Resolvable;
///
/// let root: Resolvable<'_, ()> = "".into();
/// assert!(matches!(root, Resolvable::Empty));
///
/// let absolute: Resolvable<'_, ()> = "/blog/".into();
/// assert!(matches!(absolute, Resolvable::Absolute("/blog/")));
///
/// let relative: Resolvable<'_, ()> = "../about.md".into();
/// assert!(matches!(relative, Resolvable::Relative("../about.md")));
/// ```
pub enum Resolvable<'a, D> {
    /// A document handle, looked up by identity.
    Handle(&'a Arc<D>),
    /// The empty string, meaning the site root.
    Empty,
    /// A root-anchored path, including its leading `/`.
    Absolute(&'a str),
    /// A path relative to the directory of the current document.
    Relative(&'a str),
}

impl<'a, D> Resolvable<'a, D> {
    /// Classify a string input.
    #[must_use]
    pub fn classify(input: &'a str) -> Self {
        if input.is_empty() {
            Self::Empty
        } else if input.starts_with('/') {
            Self::Absolute(input)
        } else {
            Self::Relative(input)
        }
    }

    /// Returns the string form of this input, if it is not a handle.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Handle(_) => None,
            Self::Empty => Some(""),
            Self::Absolute(s) | Self::Relative(s) => Some(s),
        }
    }
}

// Manual impls: a handle reference is Copy regardless of `D`.
impl<D> Clone for Resolvable<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Resolvable<'_, D> {}

impl<D> fmt::Debug for Resolvable<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handle(handle) => f
                .debug_tuple("Handle")
                .field(&Arc::as_ptr(handle).cast::<()>())
                .finish(),
            Self::Empty => f.write_str("Empty"),
            Self::Absolute(s) => f.debug_tuple("Absolute").field(s).finish(),
            Self::Relative(s) => f.debug_tuple("Relative").field(s).finish(),
        }
    }
}

impl<D> fmt::Display for Resolvable<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handle(_) => f.write_str("[document handle]"),
            Self::Empty => f.write_str("\"\""),
            Self::Absolute(s) | Self::Relative(s) => f.write_str(s),
        }
    }
}

impl<'a, D> From<&'a str> for Resolvable<'a, D> {
    fn from(input: &'a str) -> Self {
        Self::classify(input)
    }
}

impl<'a, D> From<&'a String> for Resolvable<'a, D> {
    fn from(input: &'a String) -> Self {
        Self::classify(input)
    }
}

impl<'a, D> From<&'a Arc<D>> for Resolvable<'a, D> {
    fn from(handle: &'a Arc<D>) -> Self {
        Self::Handle(handle)
    }
}
