//! Resolution of inputs to canonical site paths.
//!
//! This module provides the [`Resolver`] type and the standalone [`resolve`]
//! function, which turn any [`Resolvable`] into a canonical path: no leading
//! slash, `""` for the root, and a trailing slash when the input named a
//! directory.

use crate::document::DocumentSet;
use crate::error::{Error, Result};
use crate::path::normalize::{resolve_posix, strip_root, SEPARATOR};
use crate::path::types::Resolvable;

/// Resolves inputs relative to one document of a document set.
///
/// # Examples
///
/// ```
/// use relink::{DocumentSet, Resolver};
/// use std::sync::Arc;
///
/// let image = Arc::new(());
/// let docs: DocumentSet<()> = [
///     ("a/test/file.html", Arc::new(())),
///     ("a/test/child/image.gif", Arc::clone(&image)),
/// ]
/// .into_iter()
/// .collect();
///
/// let resolver = Resolver::new(&docs, "a/test/file.html");
/// assert_eq!(resolver.resolve("..").unwrap(), "a");
/// assert_eq!(resolver.resolve("../").unwrap(), "a/");
/// assert_eq!(resolver.resolve(&image).unwrap(), "a/test/child/image.gif");
/// ```
pub struct Resolver<'a, D> {
    documents: &'a DocumentSet<D>,
    current_path: &'a str,
}

impl<'a, D> Resolver<'a, D> {
    /// Create a resolver for `current_path` within `documents`.
    #[must_use]
    pub fn new(documents: &'a DocumentSet<D>, current_path: &'a str) -> Self {
        Self {
            documents,
            current_path,
        }
    }

    /// The path that relative inputs are resolved against.
    #[must_use]
    pub fn current_path(&self) -> &'a str {
        self.current_path
    }

    /// Resolve `input` to a canonical path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvableInput`] if `input` is a document handle
    /// that is not registered in the document set.
    pub fn resolve<'b>(&self, input: impl Into<Resolvable<'b, D>>) -> Result<String>
    where
        D: 'b,
    {
        resolve(self.current_path, self.documents, input)
    }
}

/// Resolve `input` to a canonical path, relative to `current_path`.
///
/// - A handle resolves to the key it is stored under in `documents`.
/// - `""` and `"/"` resolve to `""` (the root).
/// - A string starting with `/` resolves to itself minus the leading slash.
/// - Any other string is resolved against the directory containing
///   `current_path`. `..` segments clamp at the root, and a trailing slash on
///   the input is kept on the result.
///
/// # Errors
///
/// Returns [`Error::UnresolvableInput`] if `input` is a document handle that
/// is not registered in `documents`.
///
/// # Examples
///
/// ```
/// use relink::{resolve, DocumentSet};
///
/// let docs: DocumentSet<()> = DocumentSet::new();
/// assert_eq!(resolve("a/test/file.html", &docs, "child/thing").unwrap(), "a/test/child/thing");
/// assert_eq!(resolve("a/test/file.html", &docs, "/something").unwrap(), "something");
/// assert_eq!(resolve("a/test/file.html", &docs, "").unwrap(), "");
/// ```
pub fn resolve<'b, D: 'b>(
    current_path: &str,
    documents: &DocumentSet<D>,
    input: impl Into<Resolvable<'b, D>>,
) -> Result<String> {
    match input.into() {
        Resolvable::Handle(handle) => documents
            .key_of(handle)
            .map(str::to_string)
            .ok_or_else(|| Error::UnresolvableInput {
                input: "unregistered document handle".to_string(),
            }),
        Resolvable::Empty => Ok(String::new()),
        Resolvable::Absolute(path) => Ok(strip_root(path).to_string()),
        Resolvable::Relative(path) => {
            let resolved = resolve_posix(&["/", current_path, "..", path]);
            let mut result = strip_root(&resolved).to_string();

            // Keep directory semantics requested by the input
            if path.ends_with(SEPARATOR) {
                result.push(SEPARATOR);
            }

            Ok(result)
        }
    }
}
