//! Relative link computation bound to a current document.

use std::fmt;
use std::sync::Arc;

use crate::document::DocumentSet;
use crate::error::{Error, Result};
use crate::link::transform::LinkOptions;
use crate::path::normalize::{basename, dirname, is_directory};
use crate::path::relative::relative;
use crate::path::{resolve, Resolvable};

/// Computes relative links from the point of view of one document.
///
/// A linker is bound to a document set and to the path of the "current"
/// document within it. Relative string inputs are resolved against the
/// directory of that document, and [`Linker::from`] / [`Linker::to`] use it as
/// the implicit other end of the link.
///
/// # Examples
///
/// ```
/// use relink::{DocumentSet, LinkOptions, Linker};
/// use std::sync::Arc;
///
/// let docs: Arc<DocumentSet<()>> = Arc::new(
///     [
///         ("a/test/file.html", Arc::new(())),
///         ("a/test/child/image.gif", Arc::new(())),
///     ]
///     .into_iter()
///     .collect(),
/// );
///
/// let link = Linker::bind(&docs, "a/test/file.html", Arc::new(LinkOptions::default())).unwrap();
/// assert_eq!(link.from("../xyz").unwrap(), "test/file.html");
/// assert_eq!(link.to("../xyz/").unwrap(), "../xyz/");
/// assert_eq!(link.link("x/index.html", "y/index.html").unwrap(), "../y/");
/// ```
pub struct Linker<D> {
    documents: Arc<DocumentSet<D>>,
    current_path: String,
    current: Arc<D>,
    options: Arc<LinkOptions>,
}

impl<D> Linker<D> {
    /// Bind a linker to the document stored at `current_path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDocument`] if no document is stored under
    /// `current_path`.
    pub fn bind(
        documents: &Arc<DocumentSet<D>>,
        current_path: &str,
        options: Arc<LinkOptions>,
    ) -> Result<Self> {
        let current = documents
            .get(current_path)
            .cloned()
            .ok_or_else(|| Error::UnknownDocument {
                path: current_path.to_string(),
            })?;

        Ok(Self {
            documents: Arc::clone(documents),
            current_path: current_path.to_string(),
            current,
            options,
        })
    }

    /// Path of the document this linker is bound to.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Handle of the document this linker is bound to.
    #[must_use]
    pub fn current_document(&self) -> &Arc<D> {
        &self.current
    }

    /// The document set this linker resolves handles against.
    #[must_use]
    pub fn documents(&self) -> &Arc<DocumentSet<D>> {
        &self.documents
    }

    /// The options used to post-process links.
    #[must_use]
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Resolve `input` to a canonical path relative to the current document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvableInput`] for unregistered handles.
    pub fn resolve<'a>(&self, input: impl Into<Resolvable<'a, D>>) -> Result<String>
    where
        D: 'a,
    {
        resolve(&self.current_path, &self.documents, input)
    }

    /// Compute the relative link from `from` to `to`.
    ///
    /// Both ends are resolved, the relative path between their directories is
    /// computed, the target's basename is appended, and the result is passed
    /// through the configured transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvableInput`] if either end cannot be resolved.
    pub fn link<'a, 'b>(
        &self,
        from: impl Into<Resolvable<'a, D>>,
        to: impl Into<Resolvable<'b, D>>,
    ) -> Result<String>
    where
        D: 'a + 'b,
    {
        let from_resolved = self.resolve(from)?;
        let to_resolved = self.resolve(to)?;

        let from_dir = if is_directory(&from_resolved) {
            format!("/{from_resolved}")
        } else {
            dirname(&from_resolved)
        };

        let (to_dir, to_basename) = if is_directory(&to_resolved) {
            (format!("/{to_resolved}"), "")
        } else {
            (dirname(&to_resolved), basename(&to_resolved))
        };

        log::debug!(
            "Linking: {from_resolved} ({from_dir}) -> {to_resolved} ({to_dir}, {to_basename})"
        );

        let mut result = relative(&from_dir, &to_dir);
        if !result.is_empty() {
            result.push('/');
        }
        result.push_str(to_basename);
        log::debug!("Link: {result}");

        let result = self.options.apply(&result, &from_resolved, &to_resolved);
        log::debug!("After link modification: {result}");

        Ok(result)
    }

    /// Link from `source` to the current document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvableInput`] if `source` cannot be resolved.
    pub fn from<'a>(&self, source: impl Into<Resolvable<'a, D>>) -> Result<String>
    where
        D: 'a,
    {
        self.link(source, &self.current)
    }

    /// Link from the current document to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvableInput`] if `target` cannot be resolved.
    pub fn to<'a>(&self, target: impl Into<Resolvable<'a, D>>) -> Result<String>
    where
        D: 'a,
    {
        self.link(&self.current, target)
    }
}

impl<D> Clone for Linker<D> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
            current_path: self.current_path.clone(),
            current: Arc::clone(&self.current),
            options: Arc::clone(&self.options),
        }
    }
}

impl<D> fmt::Debug for Linker<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linker")
            .field("current_path", &self.current_path)
            .field("documents", &self.documents.len())
            .field("options", &self.options)
            .finish()
    }
}
