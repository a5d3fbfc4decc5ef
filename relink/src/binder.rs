//! Attaching linkers to the documents of a build pass.
//!
//! The [`Binder`] walks a document set and, for every document selected by
//! its [`PathMatcher`], creates a [`Linker`] bound to that document. The
//! result is a [`Bindings`] table keyed by document path and labelled with the
//! configured property name, which callers use to expose the linker to
//! templates.

pub mod matcher;

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentSet;
use crate::error::Result;
use crate::link::{LinkOptions, Linker};

pub use matcher::{MatchOptions, PathMatcher, DEFAULT_PATTERN};

/// Property name linkers are exposed under unless configured otherwise.
pub const DEFAULT_LINK_PROPERTY: &str = "link";

/// Creates linkers for every selected document of a document set.
///
/// # Examples
///
/// ```
/// use relink::{Binder, DocumentSet};
/// use std::sync::Arc;
///
/// let docs: Arc<DocumentSet<()>> = Arc::new(
///     [("index.md", Arc::new(())), ("blog/post.md", Arc::new(()))]
///         .into_iter()
///         .collect(),
/// );
///
/// let bindings = Binder::with_defaults().unwrap().bind(&docs).unwrap();
/// assert_eq!(bindings.property(), "link");
///
/// let link = bindings.get("blog/post.md").unwrap();
/// assert_eq!(link.to("/index.md").unwrap(), "../");
/// ```
#[derive(Debug, Clone)]
pub struct Binder {
    matcher: PathMatcher,
    link_property: String,
    options: Arc<LinkOptions>,
}

impl Binder {
    /// Create a binder from its parts.
    #[must_use]
    pub fn new(matcher: PathMatcher, link_property: impl Into<String>, options: LinkOptions) -> Self {
        Self {
            matcher,
            link_property: link_property.into(),
            options: Arc::new(options),
        }
    }

    /// Create a binder that selects every visible document, exposes linkers
    /// as `link` and applies the default transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the default pattern fails to compile.
    pub fn with_defaults() -> Result<Self> {
        let matcher = PathMatcher::new(DEFAULT_PATTERN, MatchOptions::default())?;
        Ok(Self::new(matcher, DEFAULT_LINK_PROPERTY, LinkOptions::default()))
    }

    /// Create a binder from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the
    /// configured match pattern cannot be compiled.
    pub fn from_config(config: &Config) -> Result<Self> {
        let matcher = PathMatcher::new(config.match_pattern(), config.match_options())?;
        Ok(Self::new(
            matcher,
            config.link_property(),
            config.link_options(),
        ))
    }

    /// The predicate selecting documents.
    #[must_use]
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// The property name linkers are exposed under.
    #[must_use]
    pub fn link_property(&self) -> &str {
        &self.link_property
    }

    /// The options shared by every linker this binder creates.
    #[must_use]
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Bind a linker to every selected document.
    ///
    /// # Errors
    ///
    /// Returns an error if a linker cannot be bound to a selected document.
    pub fn bind<D>(&self, documents: &Arc<DocumentSet<D>>) -> Result<Bindings<D>> {
        let mut bindings = Bindings::new(self.link_property.clone());

        for path in documents.keys() {
            if !self.matcher.is_match(path) {
                log::debug!("Skipping {path}: does not match {}", self.matcher.pattern());
                continue;
            }

            let linker = Linker::bind(documents, path, Arc::clone(&self.options))?;
            log::debug!("Bound {} to {path}", self.link_property);
            bindings.push(linker);
        }

        Ok(bindings)
    }
}

/// Linkers created by a [`Binder`], in document-set order.
pub struct Bindings<D> {
    property: String,
    linkers: Vec<Linker<D>>,
    by_path: HashMap<String, usize>,
}

impl<D> Bindings<D> {
    fn new(property: String) -> Self {
        Self {
            property,
            linkers: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    fn push(&mut self, linker: Linker<D>) {
        self.by_path
            .insert(linker.current_path().to_string(), self.linkers.len());
        self.linkers.push(linker);
    }

    /// The property name the linkers are exposed under.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The linker bound to the document at `path`, if it was selected.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Linker<D>> {
        self.by_path.get(path).map(|&index| &self.linkers[index])
    }

    /// Returns true if the document at `path` received a linker.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Number of bound documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.linkers.len()
    }

    /// Returns true if no document was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.linkers.is_empty()
    }

    /// Iterate over the linkers in document-set order.
    pub fn iter(&self) -> impl Iterator<Item = &Linker<D>> {
        self.linkers.iter()
    }
}

impl<D> std::fmt::Debug for Bindings<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindings")
            .field("property", &self.property)
            .field(
                "paths",
                &self.linkers.iter().map(Linker::current_path).collect::<Vec<_>>(),
            )
            .finish()
    }
}
